//! Synchronous facade over the async client, for callers without their own runtime.
//!
//! Calls are driven on a shared background runtime, so these methods must not be invoked
//! from inside an async context.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

macro_rules! block_on_methods {
    ($(fn $name:ident($($arg:ident : $ty:ty),*) -> $ret:ty);* $(;)?) => {
        $(pub fn $name(&self, $($arg: $ty),*) -> $ret {
            RT.block_on(self.inner.$name($($arg),*))
        })*
    };
}

pub(crate) use block_on_methods;

static RT: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Tokio runtime")
});

mod client;

pub use client::SimilarWebClient;

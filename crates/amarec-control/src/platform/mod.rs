//! OS bindings for the dispatcher's window and keyboard capabilities.

mod enigo_injector;
mod window_lister;

pub(crate) use {
    enigo_injector::{EnigoKeyInjector, to_enigo_key},
    window_lister::SystemWindowLister,
};

//! Hook for the header/footer configuration table.

use shared::{LayoutConfig, SessionApi};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpSessionApi;

/// Returns the built-in layout immediately and swaps in the backend's
/// `/api/config` document once it arrives. Any failure keeps the default.
#[hook]
pub fn use_layout_config() -> Rc<LayoutConfig> {
    let config = use_state(|| Rc::new(LayoutConfig::default()));

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match HttpSessionApi::new().layout_config().await {
                    Ok(loaded) => config.set(Rc::new(loaded)),
                    Err(e) => log::debug!("Using built-in layout config: {}", e),
                }
            });
            || ()
        });
    }

    (*config).clone()
}

use crate::shell::Site;
use contracts::config::PageConfigs;
use leptos::html::Div;
use leptos::logging::error;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    // Оркестратор создаётся один раз, когда контейнер появился в DOM
    let site = StoredValue::new_local(None::<Rc<Site>>);

    Effect::new(move |_| {
        let Some(div) = container.get() else { return };
        if site.with_value(|s| s.is_some()) {
            return;
        }

        let configs = PageConfigs::builtin();
        if let Err(e) = configs.validate() {
            error!("Invalid page configuration: {}", e);
            return;
        }

        let instance = Site::new(div.into(), configs);
        instance.init();
        site.set_value(Some(instance));
    });

    view! {
        <div class="page-container" node_ref=container></div>
    }
}

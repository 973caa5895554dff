use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view. Stays
/// revealed after that, even when scrolled back out.
#[component]
pub fn Reveal(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <div node_ref=target class=format!("reveal {class}") class=("revealed", move || revealed.get())>
            {children()}
        </div>
    }
}

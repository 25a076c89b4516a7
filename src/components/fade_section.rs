//! Wrapper that fades its children in the first time they scroll into
//! view.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::observer::{FadeHandle, VISIBLE_CLASS};

/// Content block that starts offset and transparent, then reveals once.
///
/// Registers its own element with the shell's fade observer on mount
/// and deregisters on cleanup. When no observer is available the block
/// is revealed immediately — the animation is decorative, the content
/// is not.
#[component]
pub fn FadeSection(
    /// Extra classes appended after the fade hook class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let fade = expect_context::<FadeHandle>();

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        fade.with_value(|observer| match observer {
            Some(observer) => observer.watch(&element),
            None => {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            }
        });
    });

    on_cleanup(move || {
        if let Some(element) = node.get_untracked() {
            let _ = fade.try_with_value(|observer| {
                if let Some(observer) = observer {
                    observer.unwatch(&element);
                }
            });
        }
    });

    let class = if class.is_empty() {
        "fade-section".to_owned()
    } else {
        format!("fade-section {class}")
    };

    view! {
        <div node_ref=node class=class>
            {children()}
        </div>
    }
}

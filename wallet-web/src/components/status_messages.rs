//! Auto-dismissing status messages. Clicking one dismisses it early.

use leptos::prelude::*;
use lib_connector::{MessageId, StatusMessage};

#[component]
pub fn StatusMessages<F>(messages: RwSignal<Vec<StatusMessage>>, on_dismiss: F) -> impl IntoView
where
    F: Fn(MessageId) + Copy + Send + Sync + 'static,
{
    view! {
        <div id="messageContainer" class="message-container">
            <For
                each=move || messages.get()
                key=|message| message.id
                children=move |message| {
                    let id = message.id;
                    view! {
                        <div
                            class=format!("message {}", message.kind.as_str())
                            on:click=move |_| on_dismiss(id)
                        >
                            {message.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

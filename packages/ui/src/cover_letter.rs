use content::{CoverLetter, TemplateField, TemplateFields, USAGE_TIPS};
use dioxus::prelude::*;

use crate::components::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, Label, Textarea, ToastOptions,
};
use crate::export::{copy_to_clipboard, download_text_file};
use crate::icons::{FaCopy, FaDownload};
use crate::{site_config, Icon};

const COVER_LETTER_CSS: Asset = asset!("/assets/styling/cover_letter.css");

/// Form, live preview and export buttons for the Upwork cover letter.
///
/// The four fields live only in this component; leaving the page discards them.
#[component]
pub fn CoverLetterGenerator() -> Element {
    let mut fields = use_signal(TemplateFields::default);
    let generator = use_hook(|| CoverLetter::new(site_config().signature.clone()));
    let letter = use_memo({
        let generator = generator.clone();
        move || generator.render(&fields.read())
    });
    let toast = use_toast();

    let handle_copy = move |_| {
        let text = letter();
        spawn(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    toast.success("Cover letter copied to clipboard!".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!("Copy to clipboard failed: {}", e);
                    toast.error(format!("Could not copy: {e}"), ToastOptions::new());
                }
            }
        });
    };

    let handle_download = move |_| {
        let file = generator.export(&fields.read());
        match download_text_file(&file) {
            Ok(()) => {
                toast.success("Cover letter downloaded!".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::warn!("Download of {} failed: {}", file.name, e);
                toast.error(format!("Could not download: {e}"), ToastOptions::new());
            }
        }
    };

    rsx! {
        document::Stylesheet { href: COVER_LETTER_CSS }
        div {
            class: "cover-letter",

            Card {
                CardHeader {
                    CardTitle { class: "card-title--large", "Upwork Cover Letter Template" }
                    CardDescription {
                        "Customize this template for your React Native development proposals"
                    }
                }
                CardContent {
                    div {
                        class: "field-grid",
                        for field in TemplateField::ALL {
                            div {
                                key: "{field.id()}",
                                Label { html_for: "{field.id()}", "{field.label()}" }
                                Input {
                                    id: "{field.id()}",
                                    value: fields.read().get(field).to_string(),
                                    placeholder: "{field.placeholder()}",
                                    oninput: move |evt: FormEvent| fields.write().set(field, evt.value()),
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Generated Cover Letter" }
                    div {
                        class: "cover-letter-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: handle_copy,
                            Icon { icon: FaCopy, width: 14, height: 14 }
                            span { "Copy to Clipboard" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: handle_download,
                            Icon { icon: FaDownload, width: 14, height: 14 }
                            span { "Download as Text" }
                        }
                    }
                }
                CardContent {
                    Textarea {
                        id: "generated-cover-letter",
                        class: "cover-letter-output",
                        readonly: true,
                        rows: 30,
                        value: letter(),
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Usage Tips" }
                }
                CardContent {
                    ul {
                        class: "usage-tips",
                        for tip in USAGE_TIPS {
                            li { key: "{tip}", "{tip}" }
                        }
                    }
                }
            }
        }
    }
}

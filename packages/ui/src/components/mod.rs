//! Styled building blocks shared by the portfolio and cover-letter pages.

mod button;
pub use button::{Button, ButtonSize, ButtonVariant};

mod card;
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};

mod input;
pub use input::{Input, Label, Textarea};

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider};

use dioxus::prelude::*;

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod navigation;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use input::{TextArea, TextInput};

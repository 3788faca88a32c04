pub mod button;
pub mod card;
pub mod container;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, CardVariant};
pub use container::{Container, ContainerPadding, ContainerSize, Section, SectionBackground, SectionSpacing};

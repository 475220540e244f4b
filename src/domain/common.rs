use uuid::Uuid;

/// Entities with a stable unique identifier, usable as a lookup key by the
/// calling layer.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Entities that render a one-line label for dashboards and log lines.
pub trait Displayable {
    fn display_label(&self) -> String;
}

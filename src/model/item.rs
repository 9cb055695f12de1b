/// A stored item. The `id` is assigned by the database on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Item {
    /// Overwrite the mutable fields, keeping the id.
    pub fn apply(&mut self, name: String, description: String) {
        self.name = name;
        self.description = description;
    }
}

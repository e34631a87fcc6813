//! Achievement badge model
//!
//! Badges are fixed marketing content; nothing in the demo ever unlocks one
//! at runtime.

#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    pub unlocked: bool,
}

impl Achievement {
    pub fn new(id: u32, name: &str, unlocked: bool) -> Self {
        Achievement {
            id,
            name: name.to_string(),
            unlocked,
        }
    }
}

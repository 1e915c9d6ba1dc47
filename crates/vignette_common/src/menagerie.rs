//! Animal Menagerie
//!
//! A polymorphic `make_sound` capability with two concrete variants.
//! The capability is abstract: there is no default sound, so a bare
//! animal cannot exist and every variant supplies its own voice.

/// Generic animal trait
///
/// `name` and `species` are fixed at construction; `make_sound` is the
/// one polymorphic behavior, dispatched on the concrete variant.
pub trait Animal {
    fn name(&self) -> &str;
    fn species(&self) -> &str;

    /// Produce the animal's greeting line
    fn make_sound(&self) -> String;
}

/// Dog variant
#[derive(Debug, Clone)]
pub struct Dog {
    name: String,
    species: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
        }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn species(&self) -> &str {
        &self.species
    }

    fn make_sound(&self) -> String {
        format!("{} says Woof!", self.name)
    }
}

/// Cat variant
#[derive(Debug, Clone)]
pub struct Cat {
    name: String,
    species: String,
}

impl Cat {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
        }
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn species(&self) -> &str {
        &self.species
    }

    fn make_sound(&self) -> String {
        format!("{} says Meow!", self.name)
    }
}

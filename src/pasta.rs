use std::fmt;

/// Accumulated pasta recipe. Every field stays unset until the matching
/// builder step runs; skipping steps leaves a partial recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pasta {
    pub kind: Option<String>,
    pub sauce: Option<String>,
    pub filling: Option<String>,
    pub additives: Option<String>,
}

impl fmt::Display for Pasta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unset = "(not set)";
        write!(
            f,
            "type: {}, sauce: {}, filling: {}, additives: {}",
            self.kind.as_deref().unwrap_or(unset),
            self.sauce.as_deref().unwrap_or(unset),
            self.filling.as_deref().unwrap_or(unset),
            self.additives.as_deref().unwrap_or(unset),
        )
    }
}

/// Step-sequence capability for assembling a pasta dish. The documented
/// order is type, sauce, filling, additives; `result` may be read at any
/// point and simply reflects the steps run so far.
pub trait PastaBuilder {
    fn set_type(&mut self);
    fn set_sauce(&mut self);
    fn set_filling(&mut self);
    fn set_additives(&mut self);
    fn result(&self) -> Pasta;
}

#[derive(Default)]
pub struct SpaghettiBuilder {
    pasta: Pasta,
}

impl SpaghettiBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PastaBuilder for SpaghettiBuilder {
    fn set_type(&mut self) {
        self.pasta.kind = Some("Spaghetti".to_string());
    }

    fn set_sauce(&mut self) {
        self.pasta.sauce = Some("Tomato sauce".to_string());
    }

    fn set_filling(&mut self) {
        self.pasta.filling = Some("Meatballs".to_string());
    }

    fn set_additives(&mut self) {
        self.pasta.additives = Some("Cheese, basil".to_string());
    }

    fn result(&self) -> Pasta {
        self.pasta.clone()
    }
}

#[derive(Default)]
pub struct FettuccineBuilder {
    pasta: Pasta,
}

impl FettuccineBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PastaBuilder for FettuccineBuilder {
    fn set_type(&mut self) {
        self.pasta.kind = Some("Fettuccine".to_string());
    }

    fn set_sauce(&mut self) {
        self.pasta.sauce = Some("Alfredo sauce".to_string());
    }

    fn set_filling(&mut self) {
        self.pasta.filling = Some("Chicken".to_string());
    }

    fn set_additives(&mut self) {
        self.pasta.additives = Some("Parsley, parmesan".to_string());
    }

    fn result(&self) -> Pasta {
        self.pasta.clone()
    }
}

#[derive(Default)]
pub struct PenneBuilder {
    pasta: Pasta,
}

impl PenneBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PastaBuilder for PenneBuilder {
    fn set_type(&mut self) {
        self.pasta.kind = Some("Penne".to_string());
    }

    fn set_sauce(&mut self) {
        self.pasta.sauce = Some("Pesto sauce".to_string());
    }

    fn set_filling(&mut self) {
        self.pasta.filling = Some("Shrimp".to_string());
    }

    fn set_additives(&mut self) {
        self.pasta.additives = Some("Olives, chopped chili".to_string());
    }

    fn result(&self) -> Pasta {
        self.pasta.clone()
    }
}

/// Director that prepares any pasta with the same four-step sequence:
/// type, then sauce, then filling, then additives.
pub struct PastaDirector<B: PastaBuilder> {
    builder: B,
}

impl<B: PastaBuilder> PastaDirector<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn prepare_pasta(&mut self) -> Pasta {
        self.builder.set_type();
        self.builder.set_sauce();
        self.builder.set_filling();
        self.builder.set_additives();
        self.builder.result()
    }
}

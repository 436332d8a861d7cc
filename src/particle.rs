//! Structs for particles.
//!
//! Particles do not inflect; what varies is their placement around the
//! phrase they attach to, decided by the particle's type.

use crate::{error::Error, term::Term};
use std::borrow::Cow;

/// The closed set of particle types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Question,
    Vocative,
    Negative,
    General,
}

/// A `Particle` is a particle lemma tagged with its type.
#[derive(Clone, Debug)]
pub struct Particle<'a> {
    lemma: &'a str,
    kind: ParticleKind,
}

impl<'a> Term<'a> for Particle<'a> {
    type Features = &'a str;

    fn new(particle: &'a str) -> Self {
        Particle {
            lemma: particle,
            kind: ParticleKind::General,
        }
    }

    fn lemma(&self) -> &'a str {
        self.lemma
    }

    fn inflect(&self, context: &&'a str) -> Result<Cow<'a, str>, Error> {
        Ok(Cow::Owned(self.in_context(context)))
    }
}

impl<'a> Particle<'a> {
    /// Tags the particle with a type other than the default general one.
    pub fn kind(mut self, kind: ParticleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Places the particle around the given context phrase. Question
    /// particles lead, the vocative marker "ma" replaces the particle
    /// entirely, negatives and general particles trail.
    pub fn in_context(&self, context: &str) -> String {
        match self.kind {
            ParticleKind::Question => format!("{} {}", self.lemma, context),
            ParticleKind::Vocative => format!("ma {}", context),
            ParticleKind::Negative => format!("{} {}", context, self.lemma),
            ParticleKind::General => format!("{} {}", context, self.lemma),
        }
    }

    pub fn is_question(&self) -> bool {
        self.kind == ParticleKind::Question
    }

    pub fn is_vocative(&self) -> bool {
        self.kind == ParticleKind::Vocative
    }
}

#[cfg(test)]
mod tests {
    use super::{Particle, ParticleKind};
    use crate::term::Term;

    #[test]
    fn placement() {
        let tests = [
            ("srake", ParticleKind::Question, "nga za'u", "srake nga za'u"),
            ("ma", ParticleKind::Vocative, "tsmukan", "ma tsmukan"),
            ("ke", ParticleKind::Negative, "za'u", "za'u ke"),
            ("nìteng", ParticleKind::General, "za'u", "za'u nìteng"),
        ];
        for test in tests {
            assert_eq!(
                Particle::new(test.0).kind(test.1).in_context(test.2),
                test.3,
                "in_context({}, {:?}, {})",
                test.0,
                test.1,
                test.2,
            );
        }
    }

    #[test]
    fn predicates() {
        assert!(Particle::new("srake").kind(ParticleKind::Question).is_question());
        assert!(Particle::new("ma").kind(ParticleKind::Vocative).is_vocative());
        let general = Particle::new("nìteng");
        assert!(!general.is_question());
        assert!(!general.is_vocative());
    }
}

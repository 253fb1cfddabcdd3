use serde::{Deserialize, Serialize};

/// A fixed behavioral profile handed to the model as its identity for a
/// single completion.
///
/// Personas are plain configuration records: built once, never mutated, and
/// safe to share read-only across concurrent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// The name the persona speaks under (e.g. "Alex").
    pub name: String,
    /// One-line description of what the persona is trying to do.
    pub goal: String,
    /// Character background woven into the system message.
    pub backstory: String,
}

impl Persona {
    pub fn new(
        name: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }

    /// The contemplative half of the scripted pair.
    pub fn alex() -> Self {
        Self::new(
            "Alex",
            "Engage in a thoughtful, philosophical conversation",
            "You are Alex, a thoughtful and philosophical individual who enjoys deep \
             conversations. You are interested in art, literature, and exploring the meaning \
             of life. You express yourself in a contemplative manner and ask thought-provoking \
             questions.",
        )
    }

    /// The energetic half of the scripted pair.
    pub fn jordan() -> Self {
        Self::new(
            "Jordan",
            "Share exciting experiences and connect with energy",
            "You are Jordan, an energetic and adventurous person who loves sharing \
             experiences. You're passionate about travel, outdoor activities, and trying new \
             things. You communicate with enthusiasm and often relate conversations back to \
             your exciting adventures.",
        )
    }

    /// Ad-hoc persona used for one-off transcript critiques.
    pub fn analyst() -> Self {
        Self::new(
            "Relationship Analyst",
            "Provide insightful conversation analysis",
            "You are an expert in analyzing conversations and interpersonal dynamics.",
        )
    }

    /// Renders the system message the model sees when speaking as this
    /// persona.
    pub fn system_prompt(&self) -> String {
        format!("{}\n\nYour goal: {}", self.backstory, self.goal)
    }
}

/// The two scripted participants, constructed once at startup and shared
/// read-only by every request.
#[derive(Debug, Clone)]
pub struct Personas {
    pub alex: Persona,
    pub jordan: Persona,
}

impl Default for Personas {
    fn default() -> Self {
        Self {
            alex: Persona::alex(),
            jordan: Persona::jordan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_carries_backstory_and_goal() {
        let alex = Persona::alex();
        let prompt = alex.system_prompt();

        assert!(prompt.starts_with("You are Alex"));
        assert!(prompt.contains("Your goal: Engage in a thoughtful, philosophical conversation"));
    }

    #[test]
    fn default_personas_are_the_named_pair() {
        let personas = Personas::default();
        assert_eq!(personas.alex.name, "Alex");
        assert_eq!(personas.jordan.name, "Jordan");
    }

    #[test]
    fn analyst_is_the_relationship_analyst() {
        let analyst = Persona::analyst();
        assert_eq!(analyst.name, "Relationship Analyst");
        assert!(analyst.backstory.contains("interpersonal dynamics"));
    }
}

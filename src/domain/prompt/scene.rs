//! Scene description prompt value object

/// Instruction sent with every captured frame.
const BASE_INSTRUCTION: &str = r#"Describe this image in complete detail for a blind person who needs to understand their surroundings.

IMPORTANT GUIDELINES:
1. Start with the most important elements and overall context (indoor/outdoor, day/night)
2. THOROUGHLY describe the background and all surroundings - include ALL visible elements regardless of size or perceived importance
3. Describe spatial relationships with precise directions (left, right, behind, in front, above, below, 10 feet away, etc.)
4. Mention specific colors, textures, materials, lighting conditions, and dimensions where possible
5. Include ALL details about people, objects, text, signs, potential hazards, and paths for navigation
6. Use spatial language that would help with orientation and navigation (e.g., "to your left is a doorway approximately 5 feet away")
7. Describe the entire environment including floors, walls, ceilings, and distant objects
8. Include ambient details like lighting, shadows, weather conditions, and atmosphere
9. Prioritize information that would help someone navigate the space safely
10. Use detailed, descriptive language without technical jargon
11. DO NOT mention that this is a photo - describe it as if you're explaining what's physically around them

Respond ONLY with the detailed description, without any introduction, conclusion or explanations."#;

/// Value object carrying the full prompt for a scene description request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePrompt {
    content: String,
}

impl ScenePrompt {
    /// The standard surroundings-description prompt
    pub fn standard() -> Self {
        Self {
            content: BASE_INSTRUCTION.to_string(),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for ScenePrompt {
    fn default() -> Self {
        Self::standard()
    }
}

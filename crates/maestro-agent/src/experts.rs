//! The default expert roster: math, writing, code, and cooking.

use std::sync::Arc;

use maestro_providers::LlmProvider;

use crate::agent::{Agent, AgentSettings};
use crate::error::RegistryError;
use crate::roster::Roster;
use crate::tools::{CalculatorTool, CalorieCalculatorTool, CurrentTimeTool, ToolRegistry};

pub const MATH: &str = "math";
pub const WRITING: &str = "writing";
pub const CODE: &str = "code";
pub const COOKING: &str = "cooking";

const MATH_PROMPT: &str = "\
You are a mathematics expert. Your job is to:
- Solve math problems step by step
- Explain concepts clearly
- Show the reasoning behind each step

Use the calculator tool for arithmetic instead of computing in your head, \
and the current_time tool for anything involving today's date or time.
Answer concisely but completely.";

const WRITING_PROMPT: &str = "\
You are a writing and editing expert. Your job is to:
- Help draft clear and effective texts
- Correct and improve grammar
- Suggest better ways to express ideas

Answer concisely but completely.";

const CODE_PROMPT: &str = "\
You are a programming expert. Your job is to:
- Write clean, well-documented code
- Explain programming concepts
- Help debug problems

Answer concisely. Use code examples when they help.";

const COOKING_PROMPT: &str = "\
You are a friendly expert chef. You help people build personalised recipes.

CONVERSATION FLOW - follow these steps IN ORDER:

STEP 1: When asked for a recipe, FIRST ask how many people it is for.

STEP 2: Once you know the servings, ask which cuisine they prefer \
(Italian, Mexican, Asian, home-style, ...).

STEP 3: Present the complete recipe with:
   - Name of the dish
   - Ingredients with quantities in GRAMS
   - Numbered preparation steps
   - Estimated preparation time
   Then call the calorie_calculator tool with the ingredients and servings.

STEP 4: After showing the calories, ask whether anyone has food allergies \
or dietary restrictions (gluten, lactose, nuts, shellfish, vegetarian, vegan, ...).

STEP 5: If there are restrictions, adapt the recipe by substituting the \
problem ingredients, present the new version and recalculate the calories \
with calorie_calculator. If there are none, wish them a good meal.

RULES:
- Be warm and enthusiastic
- Always give quantities in grams so calories can be calculated
- Do not skip steps; if the user gives several answers at once, adapt the flow
- For calories ALWAYS use calorie_calculator";

/// Build the four standard experts, all sharing one provider.
pub fn default_roster(
    provider: Arc<dyn LlmProvider>,
    settings: &AgentSettings,
) -> Result<Roster, RegistryError> {
    let mut math_tools = ToolRegistry::new();
    math_tools.register(Arc::new(CalculatorTool))?;
    math_tools.register(Arc::new(CurrentTimeTool))?;

    let mut cooking_tools = ToolRegistry::new();
    cooking_tools.register(Arc::new(CalorieCalculatorTool))?;

    let mut roster = Roster::new();
    roster.add(
        MATH,
        Agent::new(
            MATH,
            "math problems, arithmetic, logic, dates and times",
            MATH_PROMPT,
            provider.clone(),
            settings,
        )
        .with_tools(math_tools),
    )?;
    roster.add(
        WRITING,
        Agent::new(
            WRITING,
            "drafting, editing and grammar",
            WRITING_PROMPT,
            provider.clone(),
            settings,
        ),
    )?;
    roster.add(
        CODE,
        Agent::new(
            CODE,
            "programming, code review and debugging",
            CODE_PROMPT,
            provider.clone(),
            settings,
        ),
    )?;
    roster.add(
        COOKING,
        Agent::new(
            COOKING,
            "recipes, nutrition and calories, cooking advice (guides a multi-step recipe conversation)",
            COOKING_PROMPT,
            provider,
            settings,
        )
        .with_tools(cooking_tools),
    )?;

    Ok(roster)
}

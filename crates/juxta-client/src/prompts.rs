//! Prompts the two endpoints are known to send to their models.
//!
//! The endpoints build these themselves; they are reproduced here so a
//! front end can show what each source was asked.

/// Prompt used by the direct endpoint
pub fn direct_prompt(city: &str) -> String {
    format!(
        r#"Please provide exactly 10 interesting and factual information points about {city}.
Format your response as a JSON object with the following structure:
{{
    "city": "{city}",
    "facts": [
        "fact 1",
        "fact 2",
        ...
    ]
}}

Make sure each fact is unique, interesting, and accurate. Include a mix of historical, cultural, geographical, and modern facts about the city. If this is not a real city or you don't have information about it, please indicate that in your response."#,
        city = city
    )
}

/// Prompt used by the agent endpoint
pub fn agent_prompt(city: &str) -> String {
    format!(
        r#"Please provide exactly 10 interesting facts about {city}.

Format your response as a numbered list (1. 2. 3. etc.) with each fact on a new line.

Include a mix of:
- General historical, cultural, and geographical facts
- Specific data from your knowledge base about air quality, water pollution, and cost of living if available
- Modern facts about the city

If you have knowledge base data for this city, make sure to include those specific metrics in your facts."#,
        city = city
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_prompt_embeds_city_twice() {
        let prompt = direct_prompt("Lisbon");
        assert!(prompt.starts_with("Please provide exactly 10 interesting and factual information points about Lisbon."));
        assert!(prompt.contains(r#""city": "Lisbon","#));
    }

    #[test]
    fn test_agent_prompt_asks_for_numbered_list() {
        let prompt = agent_prompt("Lagos");
        assert!(prompt.contains("about Lagos."));
        assert!(prompt.contains("numbered list (1. 2. 3. etc.)"));
    }
}

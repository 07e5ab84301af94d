//! Prompt assembly for brand name generation.
//!
//! Output is deterministic for a given request and format: the count and core
//! idea are always present, optional criteria are appended only when set.

use crate::domain::entities::BrandNameRequest;
use crate::utils::brand_output::OutputFormat;

const SYSTEM_PAIRS: &str = "You are 'BrandSpark', a world-class AI branding assistant. \
Your expertise lies in crafting unique brand names and impactful taglines. You are highly \
creative, pay close attention to user requirements, and strictly adhere to the requested \
output format.";

const SYSTEM_JSON: &str = "You are 'BrandSpark', a world-class AI branding assistant. \
Be creative, precise, and output only a single valid JSON array as specified.";

const PAIRS_INSTRUCTIONS: &str = "\
1.  Brand Name: Should be memorable, distinct, easy to spell, and easy to pronounce. It should be relevant to the core idea and style. If an industry is provided, aim for names that are differentiated from common existing brands in that industry.
2.  Tagline: Should be concise (ideally 3-7 words), compelling, and capture the brand's essence or unique selling proposition. It must complement the brand name.

Output Format:
Provide the response as a list of brand name and tagline pairs. Each pair MUST be formatted exactly as follows, with 'Brand Name:' and 'Tagline:' on separate lines, followed by a blank line before the next pair. Do not include any numbering, introductory/concluding text, or any other explanations.

Brand Name: [The Brand Name]
Tagline: [The Tagline]

Brand Name: [Another Brand Name]
Tagline: [Another Tagline]
";

const JSON_INSTRUCTIONS: &str = "\
1.  Brand Name: Memorable, distinct, easy to spell and pronounce, relevant to the core idea and style. Differentiated if an industry is provided.
2.  Tagline: Concise (3-7 words), compelling, capturing the brand's essence, complementing the brand name.
3.  Suggested Domains: An array of 3-5 relevant domain name suggestions (e.g., brandname.com, getbrandname.io, brandname.ai). Include a mix of common and creative TLDs. Only include valid and relevant TLDs.

Output Format:
VERY IMPORTANT: Provide the entire response as a single, valid JSON array. Each element in the array should be an object with the following keys: \"name\" (string), \"tagline\" (string), and \"suggestedDomains\" (array of strings). Do not include any text outside of this JSON array.
";

/// System prompt matching the output format.
pub fn system_prompt(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => SYSTEM_JSON,
        OutputFormat::Pairs => SYSTEM_PAIRS,
    }
}

/// Builds the user prompt for `request`, asking for `count` suggestions.
pub fn build_prompt(request: &BrandNameRequest, count: usize, format: OutputFormat) -> String {
    let subject = match format {
        OutputFormat::Json => "brand name, tagline, and domain suggestion sets",
        OutputFormat::Pairs => "brand name and tagline pairs",
    };

    let mut prompt = format!(
        "Your goal is to generate {count} unique and creative {subject}.\n\n\
         Consider the following criteria carefully:\n\
         - Core Idea/Description: {}\n",
        request.prompt.trim()
    );

    if let Some(industry) = non_blank(request.industry.as_deref()) {
        prompt.push_str(&format!("- Industry: {industry}\n"));
    }
    if let Some(style) = non_blank(request.style.as_deref()) {
        prompt.push_str(&format!("- Desired Style/Vibe: {style}\n"));
    }

    let keywords: Vec<&str> = request
        .keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if !keywords.is_empty() {
        prompt.push_str(&format!(
            "- Key Themes/Keywords to incorporate or allude to: {}\n",
            keywords.join(", ")
        ));
    }

    if let Some(length) = request.length {
        prompt.push_str(&format!(
            "- Target Brand Name Length: Approximately {length} characters. \
             Shorter is often better if it's impactful.\n"
        ));
    }

    prompt.push_str(&format!("\nFor each of the {count} suggestions, provide:\n"));
    prompt.push_str(match format {
        OutputFormat::Json => JSON_INSTRUCTIONS,
        OutputFormat::Pairs => PAIRS_INSTRUCTIONS,
    });

    prompt
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

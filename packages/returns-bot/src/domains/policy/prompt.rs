//! Prompt template for returns-policy writing.
//!
//! The category rules are instructions to the model, not program logic: the
//! model infers the product category from the scraped text.

/// Category rules and formatting instructions, sent verbatim.
pub const POLICY_GUIDELINES: &str = "\
Guidelines:
- If it's apparel or activewear, allow 30-day returns, but exclude used or hygiene-sensitive items like underwear, swimwear, etc.
- If it's books or media, only accept returns for unused, resellable items.
- If it's hydration products, supplements, or bottles, disallow returns on opened items for safety.
- If you're unsure, make a safe general-purpose policy.
- Use headings and bullet points.
- Keep the tone helpful, clear, and professional.";

/// Build the single user message for the completion call.
///
/// A non-empty `manual_override` is stated first as the merchant's own word
/// on what they sell.
pub fn build_policy_prompt(scraped_text: &str, manual_override: Option<&str>) -> String {
    let product_hint = match manual_override {
        Some(category) if !category.is_empty() => {
            format!("The merchant manually specified: {category}.\n\n")
        }
        _ => String::new(),
    };

    format!(
        "
{product_hint}
Here is the homepage content of a Shopify ecommerce website:

---
{scraped_text}
---

From this content, infer what kind of products the site sells.
Then, write a tailored customer-facing Returns Policy for that product category.

{guidelines}
",
        guidelines = POLICY_GUIDELINES,
    )
}

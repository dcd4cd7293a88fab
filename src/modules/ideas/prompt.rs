use super::model::{Mode, IDEA_COUNT};

const BLOG_INSTRUCTIONS: &str = "Create compelling blog post titles that are:
- SEO-optimized and click-worthy
- Include power words and emotional triggers
- Address specific pain points or benefits
- Use numbers, questions, or \"how-to\" formats
- Keep between 50-70 characters for optimal sharing";

const YOUTUBE_INSTRUCTIONS: &str = "Create viral YouTube video titles that are:
- Attention-grabbing and curiosity-driven
- Include trending keywords and phrases
- Use emotional hooks and cliffhangers
- Optimized for YouTube's algorithm
- Include emojis strategically
- Keep under 60 characters for mobile viewing";

const TWEET_INSTRUCTIONS: &str = "Create engaging Twitter/X post ideas that are:
- Concise and punchy (under 280 characters)
- Include relevant hashtags
- Use storytelling or controversial angles
- Include calls-to-action
- Tap into current trends and conversations
- Use emojis to increase engagement";

fn mode_instructions(mode: Mode) -> &'static str {
    match mode {
        Mode::Blog => BLOG_INSTRUCTIONS,
        Mode::Youtube => YOUTUBE_INSTRUCTIONS,
        Mode::Tweet => TWEET_INSTRUCTIONS,
    }
}

/// Builds the instruction sent to the provider. Pure in `(topic, mode)`.
pub fn build_instruction(topic: &str, mode: Mode) -> String {
    let preamble = format!(
        "You are a professional content creator and marketing expert. Generate {IDEA_COUNT} creative, engaging, and high-converting content ideas for the topic: \"{topic}\"."
    );
    let format = format!(
        "Format your response as a numbered list (1-{IDEA_COUNT}) with each idea on a new line. Make each idea unique, creative, and tailored to the specific mode."
    );

    format!("{preamble}\n\n{}\n\n{format}", mode_instructions(mode))
}

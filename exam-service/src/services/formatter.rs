/// Turn a raw numbered-list completion into a list of questions.
///
/// Splits on newlines, drops lines that are blank after trimming, and
/// strips leading characters from the set {digits, '.', ' '} on each
/// surviving line. The strip set deliberately excludes ')' and '-', so
/// "12) Question" comes out as ") Question".
pub fn clean_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' ')
                .to_string()
        })
        .collect()
}

//! Order number from a speech-to-text transcript.
//!
//! Recognizers return things like "pedido 12 345" or "um dois três quatro";
//! digits and spoken Portuguese digit words are kept, everything else dropped.

fn spoken_digit(word: &str) -> Option<char> {
    let digit = match word {
        "zero" => '0',
        "um" | "uma" => '1',
        "dois" | "duas" => '2',
        "três" | "tres" => '3',
        "quatro" => '4',
        "cinco" => '5',
        "seis" | "meia" => '6',
        "sete" => '7',
        "oito" => '8',
        "nove" => '9',
        _ => return None,
    };
    Some(digit)
}

/// `None` when the transcript holds no digits at all
pub fn order_number_from_transcript(transcript: &str) -> Option<String> {
    let mut number = String::new();

    for token in transcript
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.' || c == '-')
        .filter(|t| !t.is_empty())
    {
        if token.chars().all(|c| c.is_ascii_digit()) {
            number.push_str(token);
        } else if let Some(digit) = spoken_digit(&token.to_lowercase()) {
            number.push(digit);
        }
    }

    if number.is_empty() {
        None
    } else {
        Some(number)
    }
}

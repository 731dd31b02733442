use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 60;
const INDENT: &str = "     ";

pub const WELCOME: &str = "Hello! I'm Slave! Your very own productivity application.
What can I do for you? Type 'help' for commands!";

pub fn divider() -> String {
    format!("    {}", "_".repeat(LINE_WIDTH))
}

/// Puts a reply between two dividers, indenting and wrapping every line.
pub fn frame(message: &str) -> String {
    let mut framed = divider();
    framed.push('\n');
    for line in message.lines() {
        for wrapped in wrap(line, LINE_WIDTH - INDENT.len()) {
            framed.push_str(INDENT);
            framed.push_str(&wrapped);
            framed.push('\n');
        }
    }
    framed.push_str(&divider());
    framed.push('\n');
    framed
}

/// Greedy word wrap by display width; a single word wider than `width`
/// gets a line of its own.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.width() <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split(' ') {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

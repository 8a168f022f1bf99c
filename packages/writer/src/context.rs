/// Text buffer with indentation tracking used while rendering a file
pub struct RenderContext {
    buffer: String,
    indent_level: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
    }

    /// Emit every line of `text` as a `//` comment
    pub fn add_comment(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.add_line("//");
            } else {
                self.add_line(&format!("// {}", line));
            }
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

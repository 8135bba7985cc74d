//! Code generation context and state.
//!
//! The `CodegenContext` holds the configuration being generated from and the
//! output buffer with its current indentation.

use covgen_ir::CoverageConfig;

/// Code generation context.
pub struct CodegenContext<'a> {
    /// Tables the program is generated from.
    pub config: &'a CoverageConfig,
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
}

impl<'a> CodegenContext<'a> {
    /// Create a new codegen context.
    pub fn new(config: &'a CoverageConfig) -> Self {
        Self {
            config,
            indent: 0,
            output: String::with_capacity(64 * 1024),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write indentation to output.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push('\t');
        }
    }

    /// Write a string to output, verbatim.
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Open a `{` block and indent.
    pub fn open_block(&mut self, header: &str) {
        if header.is_empty() {
            self.writeln("{");
        } else {
            self.writeln(&format!("{header} {{"));
        }
        self.indent();
    }

    /// Dedent and close a block.
    pub fn close_block(&mut self) {
        self.dedent();
        self.writeln("}");
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

/* Indented text builder shared by the converter and companion emitters */

use primjson_types::Namespace;

const PRAGMA_WARNINGS: [(&str, &str); 2] = [
    ("1591", "Missing XML comment on public member"),
    ("8604", "Possible null reference argument for parameter."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /* `opened` is false for the global namespace, which writes no braces */
    Namespace { opened: bool },
    Block,
}

/// Line-oriented builder with brace-delimited scopes.
///
/// Each open scope adds one indent unit. Blank lines are written without
/// indentation, and `finish` closes anything still open so output is always
/// balanced.
#[derive(Debug)]
pub struct SourceBuilder<'a> {
    out: String,
    unit: &'a str,
    depth: usize,
    scopes: Vec<Scope>,
}

impl<'a> SourceBuilder<'a> {
    pub fn new(unit: &'a str) -> Self {
        Self {
            out: String::new(),
            unit,
            depth: 0,
            scopes: Vec::new(),
        }
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(self.unit);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn enter_namespace(&mut self, namespace: &Namespace) -> &mut Self {
        match namespace {
            Namespace::Global => {
                self.scopes.push(Scope::Namespace { opened: false });
            }
            Namespace::Local(path) => {
                self.line(format!("namespace {}", path));
                self.line("{");
                self.depth += 1;
                self.scopes.push(Scope::Namespace { opened: true });
            }
        }
        self
    }

    pub fn enter_block(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(header);
        self.line("{");
        self.depth += 1;
        self.scopes.push(Scope::Block);
        self
    }

    /// Close the innermost scope, namespace or block.
    pub fn leave(&mut self) -> &mut Self {
        match self.scopes.pop() {
            Some(Scope::Block) | Some(Scope::Namespace { opened: true }) => {
                self.depth = self.depth.saturating_sub(1);
                self.line("}");
            }
            Some(Scope::Namespace { opened: false }) | None => {}
        }
        self
    }

    /// Block with an empty body, written as `{` and `}` on their own lines.
    pub fn empty_block(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.enter_block(header).leave()
    }

    pub fn auto_generated_comment(&mut self) -> &mut Self {
        self.line("// <auto-generated/>")
    }

    pub fn pragma_disable(&mut self) -> &mut Self {
        self.pragma("disable")
    }

    pub fn pragma_restore(&mut self) -> &mut Self {
        self.pragma("restore")
    }

    fn pragma(&mut self, action: &str) -> &mut Self {
        for (code, reason) in PRAGMA_WARNINGS {
            self.line(format!("// Disable CS{} - {}", code, reason));
            self.line(format!("#pragma warning {} {}", action, code));
        }
        self
    }

    pub fn generated_code_attribute(&mut self, name: &str, version: &str) -> &mut Self {
        self.line(format!(
            "[global::System.CodeDom.Compiler.GeneratedCodeAttribute(\"{}\", \"{}\")]",
            name, version
        ))
    }

    pub fn finish(mut self) -> String {
        while !self.scopes.is_empty() {
            self.leave();
        }
        self.out
    }
}

use super::node::{FieldValue, NodeId};
use super::Cst;

const INDENT_TOKEN: &str = "  ";

fn indent(num: usize) -> String {
    INDENT_TOKEN.repeat(num)
}

impl Cst {
    /// Renders a compact textual listing of the subtree at `id`.
    ///
    /// Each node occupies one line with its snake_case production name,
    /// children indented one level, and list fields introduced by the field
    /// name on its own line.
    pub fn print_tree(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_compact(id, 0, &mut out);
        out
    }

    fn write_compact(&self, id: NodeId, level: usize, out: &mut String) {
        let kind = self.get(id);
        if let Some(t) = kind.as_terminal() {
            out.push_str(&format!("{}{}\n", indent(level), t.as_str()));
            return;
        }
        out.push_str(&format!("{}{}\n", indent(level), kind.kind_name()));
        for field in kind.fields() {
            match &field.value {
                FieldValue::One(child) => self.write_compact(*child, level + 1, out),
                FieldValue::Opt(Some(child)) => self.write_compact(*child, level + 1, out),
                FieldValue::Opt(None) => (),
                FieldValue::Many(children) => {
                    out.push_str(&format!("{}{}\n", indent(level + 1), field.name));
                    for child in children {
                        self.write_compact(*child, level + 2, out);
                    }
                }
            }
        }
    }

    /// Renders the subtree at `id` with every field annotated by its declared
    /// union type; the variant actually chosen is marked after the `=` sign.
    pub fn print_annotated(&self, id: NodeId) -> String {
        let mut out = String::new();
        let label = self.get(id).kind_name().to_string();
        self.write_annotated(id, &label, self.get(id).kind_name(), 0, &mut out);
        out
    }

    fn write_annotated(&self, id: NodeId, label: &str, decl: &str, level: usize, out: &mut String) {
        let kind = self.get(id);
        if let Some(t) = kind.as_terminal() {
            out.push_str(&format!(
                "{}{} [ {} ] \"{}\" line {} char {}\n",
                indent(level),
                label,
                decl,
                t.as_str(),
                t.locate().line(),
                t.locate().col()
            ));
            return;
        }
        out.push_str(&format!(
            "{}{} [ {} = {} ]\n",
            indent(level),
            label,
            decl,
            kind.kind_name()
        ));
        for field in kind.fields() {
            match &field.value {
                FieldValue::One(child) => {
                    self.write_annotated(*child, field.name, field.decl, level + 1, out)
                }
                FieldValue::Opt(Some(child)) => {
                    self.write_annotated(*child, field.name, field.decl, level + 1, out)
                }
                FieldValue::Opt(None) => {
                    out.push_str(&format!(
                        "{}{} [ {} ] none\n",
                        indent(level + 1),
                        field.name,
                        field.decl
                    ));
                }
                FieldValue::Many(children) => {
                    out.push_str(&format!(
                        "{}{}[{} items] [ {} ]\n",
                        indent(level + 1),
                        field.name,
                        children.len(),
                        field.decl
                    ));
                    for (ii, child) in children.iter().enumerate() {
                        let item_label = format!("{}[{}]", field.name, ii);
                        self.write_annotated(*child, &item_label, field.decl, level + 2, out);
                    }
                }
            }
        }
    }
}

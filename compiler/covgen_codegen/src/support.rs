//! Support declarations for the generated program.
//!
//! Everything around the generated declarations that the fixed test block
//! and the debugger session rely on:
//!
//! - **Includes** for every container family plus the infrastructure header
//! - **`BREAKPOINT`** macro trapping into the attached debugger
//! - **`Thing`**, a labeled record usable as a hash and ordered key
//! - **`Node`**, a plain linked node for pointer inspection
//! - **`main`**, calling each group function and the fixed entry point

use crate::context::CodegenContext;

/// Support declaration emitter.
pub struct SupportDecls;

impl SupportDecls {
    /// Emit one `#include` per family, then the infrastructure header.
    pub fn emit_includes(ctx: &mut CodegenContext<'_>) {
        let config = ctx.config;
        for family in config.families.iter() {
            ctx.writeln(&format!("#include \"{}.h\"", family.header_stem()));
        }
        ctx.writeln(&format!("#include \"{}.h\"", config.infrastructure_header));
        ctx.newline();
        ctx.writeln("using namespace std;");
        ctx.newline();
    }

    /// Emit the breakpoint macro and the record types.
    pub fn emit_types(ctx: &mut CodegenContext<'_>) {
        Self::emit_breakpoint(ctx);
        Self::emit_thing(ctx);
        Self::emit_node(ctx);
    }

    fn emit_breakpoint(ctx: &mut CodegenContext<'_>) {
        const REPORT: &str = "cout << \"BREAK @\" << __LINE__ << endl;";

        ctx.writeln("#if defined(__APPLE__)");
        ctx.writeln(&format!("#define BREAKPOINT __builtin_debugtrap(); {REPORT}"));
        ctx.writeln("#elif defined(_WIN32)");
        ctx.writeln(&format!("#define BREAKPOINT __debugbreak(); {REPORT}"));
        ctx.writeln("#else");
        ctx.writeln("#include <csignal>");
        ctx.writeln(&format!("#define BREAKPOINT raise(SIGTRAP); {REPORT}"));
        ctx.writeln("#endif");
        ctx.newline();
    }

    /// `Thing` hashes by number and orders by (number, label).
    fn emit_thing(ctx: &mut CodegenContext<'_>) {
        ctx.open_block("struct Thing");
        ctx.writeln("int num;");
        ctx.writeln("string label;");
        ctx.dedent();
        ctx.writeln("};");

        ctx.open_block("int hashCode(const Thing& t)");
        ctx.writeln("return t.num;");
        ctx.close_block();

        ctx.open_block("bool operator ==(const Thing& t1, const Thing& t2)");
        ctx.writeln("return t1.num == t2.num && t1.label == t2.label;");
        ctx.close_block();

        ctx.open_block("bool operator <(const Thing& t1, const Thing& t2)");
        ctx.writeln(
            "return stanfordcpplib::collections::compareTo(t1.num, t2.num, t1.label, t2.label) < 0;",
        );
        ctx.close_block();
        ctx.newline();
    }

    fn emit_node(ctx: &mut CodegenContext<'_>) {
        ctx.open_block("struct Node");
        ctx.writeln("char letter;");
        ctx.writeln("Node *left, *right;");
        ctx.dedent();
        ctx.writeln("};");
        ctx.newline();
    }

    /// Emit `main`, calling `functions` in order and returning success.
    pub fn emit_main(ctx: &mut CodegenContext<'_>, functions: &[String]) {
        ctx.open_block("int main()");
        for function in functions {
            ctx.writeln(&format!("{function}();"));
        }
        ctx.writeln("return 0;");
        ctx.close_block();
    }
}

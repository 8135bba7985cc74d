//! Program assembly.
//!
//! Lays out the complete generated source:
//!
//! ```text
//! includes → support declarations → stanford_linear()
//!          → stanford_hash() → stanford_tree() → stanford_other()
//!          → fixed block (verbatim) → main()
//! ```
//!
//! Each family gets its own `{ ... }` scope inside its group function, and
//! each declaration is `<render> <name> = <initializer>;`.

use covgen_ir::{ContainerExpander, CoverageConfig, CoverageError, FamilyGroup};
use tracing::trace;

use crate::context::CodegenContext;
use crate::init::InitializerBuilder;
use crate::resource::FixedBlock;
use crate::support::SupportDecls;

/// Where `BREAKPOINT;` statements go.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BreakpointPlacement {
    /// After every declaration.
    #[default]
    EachDeclaration,
    /// Once, at the end of each family scope.
    EachScope,
}

/// Knobs that change the layout of the generated program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    pub breakpoints: BreakpointPlacement,
}

/// Assembles the full coverage program.
pub struct ProgramAssembler<'a> {
    config: &'a CoverageConfig,
    options: AssembleOptions,
}

impl<'a> ProgramAssembler<'a> {
    pub fn new(config: &'a CoverageConfig) -> Self {
        Self {
            config,
            options: AssembleOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate the complete program text.
    ///
    /// Fails on the first unresolved type; nothing is returned in that case.
    #[tracing::instrument(level = "debug", skip_all, fields(families = self.config.families.len()))]
    pub fn assemble(&self, fixed: &FixedBlock) -> Result<String, CoverageError> {
        let mut ctx = CodegenContext::new(self.config);
        let expander = ContainerExpander::new(self.config);
        let builder = InitializerBuilder::new(self.config);

        SupportDecls::emit_includes(&mut ctx);
        SupportDecls::emit_types(&mut ctx);

        let mut calls = Vec::with_capacity(FamilyGroup::ALL.len() + 1);
        for group in FamilyGroup::ALL {
            self.emit_group(&mut ctx, &expander, &builder, group)?;
            calls.push(self.config.group_function(group));
        }

        ctx.write(&fixed.text);
        if !fixed.text.is_empty() && !fixed.text.ends_with('\n') {
            ctx.newline();
        }
        ctx.newline();

        calls.push(fixed.entry.clone());
        SupportDecls::emit_main(&mut ctx, &calls);

        Ok(ctx.take_output())
    }

    #[tracing::instrument(level = "debug", skip(self, ctx, expander, builder))]
    fn emit_group(
        &self,
        ctx: &mut CodegenContext<'_>,
        expander: &ContainerExpander<'_>,
        builder: &InitializerBuilder<'_>,
        group: FamilyGroup,
    ) -> Result<(), CoverageError> {
        ctx.open_block(&format!("void {}()", self.config.group_function(group)));

        for family in self.config.families.in_group(group) {
            ctx.open_block("");
            for descriptor in expander.expand(&family.name)? {
                let init = builder.build(&descriptor)?;
                let decl = format!("{} {} = {init};", descriptor.render(), descriptor.name());
                trace!(%decl);
                ctx.writeln(&decl);
                if self.options.breakpoints == BreakpointPlacement::EachDeclaration {
                    ctx.writeln("BREAKPOINT;");
                }
            }
            if self.options.breakpoints == BreakpointPlacement::EachScope {
                ctx.writeln("BREAKPOINT;");
            }
            ctx.close_block();
        }

        ctx.close_block();
        ctx.newline();
        Ok(())
    }
}

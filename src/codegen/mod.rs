//! C++ code generation for Lore programs.
//!
//! The generator walks the AST once and renders a single translation unit
//! as a string. It performs no checking of its own; whatever the parser
//! accepted is lowered, and type errors surface from the host compiler.
mod expression;
mod prelude;
mod statement;

pub use prelude::CPP_PRELUDE;

use std::collections::HashSet;

use log::info;

use crate::parser::ast::{
    Declaration, Expression, FunctionDeclaration, Program, Statement, StructDeclaration, TypeName,
    VariableDeclaration,
};

/// Walks a parsed program and renders the C++ translation unit.
#[derive(Default)]
pub struct Codegen {
    output: String,
    indent: usize,
    /// Names of all declared structures. A call site whose name is in here
    /// is a construction, not a function call.
    structs: HashSet<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(mut self, program: &Program) -> String {
        info!("Generating code...");

        // First pass: collect structure names, so construction sites can be
        // told apart from calls regardless of declaration order.
        for declaration in &program.declarations {
            if let Declaration::Struct(StructDeclaration { name, .. }) = declaration {
                self.structs.insert(name.clone());
            }
        }

        self.output.push_str(CPP_PRELUDE);

        for declaration in &program.declarations {
            self.push_line("");
            match declaration {
                Declaration::Variable(variable) => {
                    let line = self.render_variable(variable);
                    self.push_line(&line);
                }
                Declaration::Function(function) => self.emit_function(function),
                Declaration::Struct(structure) => self.emit_struct(structure),
            }
        }

        self.output
    }

    fn emit_struct(&mut self, structure: &StructDeclaration) {
        self.push_line(&format!("struct {} {{", structure.name));
        self.indent += 1;
        for field in &structure.fields {
            // field initializers are parsed but never emitted
            let field_type = self.lower_type(&field.type_name);
            self.push_line(&format!("{field_type} {name};", name = field.name));
        }
        self.indent -= 1;
        self.push_line("};");
    }

    fn emit_function(&mut self, function: &FunctionDeclaration) {
        let is_main = function.name == "main";

        let return_type = if is_main {
            "int".to_string()
        } else {
            self.lower_type(&function.return_type)
        };

        let parameters = function
            .parameters
            .iter()
            .map(|parameter| {
                format!(
                    "{} {}",
                    self.lower_type(&parameter.type_name),
                    parameter.name
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        let Some(body) = &function.body else {
            self.push_line(&format!("{return_type} {}({parameters});", function.name));
            return;
        };

        self.push_line(&format!("{return_type} {}({parameters}) {{", function.name));
        self.indent += 1;
        for statement in &body.statements {
            self.emit_statement(statement);
        }
        if is_main && !matches!(body.statements.last(), Some(Statement::Return(_))) {
            self.push_line("return 0;");
        }
        self.indent -= 1;
        self.push_line("}");
    }

    /// Render a variable declaration (without trailing newline). An
    /// initializer that constructs a declared structure becomes a braced
    /// initializer list.
    fn render_variable(&self, variable: &VariableDeclaration) -> String {
        let variable_type = self.lower_type(&variable.type_name);

        match &variable.initializer {
            Some(Expression::Call(call)) if self.structs.contains(&call.name) => {
                let arguments = self.emit_arguments(&call.arguments);
                format!(
                    "{variable_type} {name} = {{{arguments}}};",
                    name = variable.name
                )
            }
            Some(initializer) => format!(
                "{variable_type} {name} = {value};",
                name = variable.name,
                value = self.emit_expression(initializer)
            ),
            None => format!("{variable_type} {name};", name = variable.name),
        }
    }

    fn lower_type(&self, type_name: &TypeName) -> String {
        match type_name {
            TypeName::Whole => "int".into(),
            TypeName::Precise => "double".into(),
            TypeName::Series => "std::string".into(),
            TypeName::State => "bool".into(),
            TypeName::Void => "void".into(),
            TypeName::Sequence(element) => {
                format!("std::vector<{}>", self.lower_type(element))
            }
            TypeName::Named(name) => name.clone(),
        }
    }

    fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.output.push('\n');
            return;
        }

        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(line);
        self.output.push('\n');
    }
}

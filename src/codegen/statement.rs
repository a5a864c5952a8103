use crate::parser::ast::{
    AssignTarget, Assignment, Block, IfStatement, ReturnStatement, Statement, WhileLoop,
};

use super::Codegen;

impl Codegen {
    pub(super) fn emit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::VariableDeclaration(variable) => {
                let line = self.render_variable(variable);
                self.push_line(&line);
            }
            Statement::If(if_statement) => self.emit_if(if_statement),
            Statement::WhileLoop(while_loop) => self.emit_while(while_loop),
            Statement::Return(return_statement) => self.emit_return(return_statement),
            Statement::Assignment(assignment) => self.emit_assignment(assignment),
            Statement::Expression(expression) => {
                let rendered = self.emit_expression(expression);
                self.push_line(&format!("{rendered};"));
            }
        }
    }

    fn emit_block(&mut self, block: &Block) {
        for statement in &block.statements {
            self.emit_statement(statement);
        }
    }

    fn emit_if(&mut self, if_statement: &IfStatement) {
        let condition = self.emit_expression(&if_statement.condition);
        self.push_line(&format!("if ({condition}) {{"));
        self.indent += 1;
        self.emit_block(&if_statement.then_branch);
        self.indent -= 1;

        if let Some(else_branch) = &if_statement.else_branch {
            self.push_line("} else {");
            self.indent += 1;
            self.emit_block(else_branch);
            self.indent -= 1;
        }

        self.push_line("}");
    }

    fn emit_while(&mut self, while_loop: &WhileLoop) {
        let condition = self.emit_expression(&while_loop.condition);
        self.push_line(&format!("while ({condition}) {{"));
        self.indent += 1;
        self.emit_block(&while_loop.body);
        self.indent -= 1;
        self.push_line("}");
    }

    fn emit_return(&mut self, return_statement: &ReturnStatement) {
        match &return_statement.value {
            Some(value) => {
                let value = self.emit_expression(value);
                self.push_line(&format!("return {value};"));
            }
            None => self.push_line("return;"),
        }
    }

    fn emit_assignment(&mut self, assignment: &Assignment) {
        let target = match &assignment.target {
            AssignTarget::Variable(name) => name.clone(),
            AssignTarget::Index { name, index } => {
                format!("{name}[{}]", self.emit_expression(index))
            }
            AssignTarget::Member { object, member } => {
                format!("{}.{member}", self.emit_expression(object))
            }
        };

        let value = self.emit_expression(&assignment.value);
        self.push_line(&format!("{target} = {value};"));
    }
}

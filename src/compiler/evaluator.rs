use std::collections::HashMap;

use log::trace;

use crate::program::{Instruction, Operator};

/// Truth values of the variables of a formula.
pub type Assignment = HashMap<char, bool>;

/// Runs a postfix program against one assignment.
///
/// Variables absent from `assignment` read as `false`. Binary operators pop
/// their right operand first, then their left one, so `P Q →` computes
/// `¬P ∨ Q`. A missing operand reads as `false` for `¬`, `∧`, `∨` and `→`.
/// `↔` compares missing operands as absent values instead: two missing
/// operands are equivalent, and a missing operand never equals a present one.
/// An empty program yields `false`.
///
/// # Example
/// ```
/// use propcalc::{
///     compiler::evaluator::{Assignment, evaluate},
///     program::{Instruction, Operator},
/// };
///
/// let program = [Instruction::PushVariable('P'),
///                Instruction::PushVariable('Q'),
///                Instruction::Apply(Operator::Implies)];
///
/// let assignment = Assignment::from([('P', true), ('Q', false)]);
/// assert!(!evaluate(&program, &assignment));
///
/// let assignment = Assignment::from([('P', false), ('Q', false)]);
/// assert!(evaluate(&program, &assignment));
/// ```
#[must_use]
pub fn evaluate(instructions: &[Instruction], assignment: &Assignment) -> bool {
    let mut stack: Vec<bool> = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        let value = match *instruction {
            Instruction::PushVariable(name) => assignment.get(&name).copied().unwrap_or(false),
            Instruction::Apply(Operator::Not) => !pop(&mut stack).unwrap_or(false),
            Instruction::Apply(Operator::And) => {
                let (a, b) = pop_pair(&mut stack);
                a.unwrap_or(false) && b.unwrap_or(false)
            },
            Instruction::Apply(Operator::Or) => {
                let (a, b) = pop_pair(&mut stack);
                a.unwrap_or(false) || b.unwrap_or(false)
            },
            Instruction::Apply(Operator::Implies) => {
                let (a, b) = pop_pair(&mut stack);
                !a.unwrap_or(false) || b.unwrap_or(false)
            },
            Instruction::Apply(Operator::Iff) => {
                let (a, b) = pop_pair(&mut stack);
                a == b
            },
        };
        stack.push(value);
    }

    pop(&mut stack).unwrap_or(false)
}

fn pop(stack: &mut Vec<bool>) -> Option<bool> {
    let value = stack.pop();
    if value.is_none() {
        trace!("operand missing");
    }
    value
}

/// Pops `(left, right)`; the right operand sits on top.
fn pop_pair(stack: &mut Vec<bool>) -> (Option<bool>, Option<bool>) {
    let right = pop(stack);
    let left = pop(stack);
    (left, right)
}

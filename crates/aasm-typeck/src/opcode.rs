/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! The aasm instruction set, as far as typing is concerned.
//!
//! Logging statements and module instructions are not part of it, neither is checked through an operator context.

use std::{fmt::Display, str::FromStr};

use aasm_types::{Arity, Operator};

use crate::error::TypeckError;

macro_rules! opcodes {
    ($($variant:ident => $mnemonic:literal, $operator:ident;)*) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Opcode {
            $($variant,)*
        }

        impl Opcode {
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            pub fn mnemonic(&self) -> &'static str {
                match self {
                    $(Opcode::$variant => $mnemonic,)*
                }
            }

            ///The operator family whose context validates this instruction.
            pub fn operator(&self) -> Operator {
                match self {
                    $(Opcode::$variant => Operator::$operator,)*
                }
            }
        }
    };
}

opcodes! {
    Decl => "DECL", Declaration;

    Ieq => "IEQ", UnorderedComparison;
    Ineq => "INEQ", UnorderedComparison;
    Weq => "WEQ", UnorderedComparison;
    Wneq => "WNEQ", UnorderedComparison;

    Igt => "IGT", OrderedComparison;
    Igteq => "IGTEQ", OrderedComparison;
    Ilt => "ILT", OrderedComparison;
    Ilteq => "ILTEQ", OrderedComparison;
    Wgt => "WGT", OrderedComparison;
    Wgteq => "WGTEQ", OrderedComparison;
    Wlt => "WLT", OrderedComparison;
    Wlteq => "WLTEQ", OrderedComparison;

    Add => "ADD", Math;
    Subt => "SUBT", Math;
    Mult => "MULT", Math;
    Div => "DIV", Math;
    Sin => "SIN", Math;
    Cos => "COS", Math;
    Pow => "POW", MathExponentiation;
    Log => "LOG", MathExponentiation;
    Mod => "MOD", MathModulo;

    Adde => "ADDE", ListModification;
    Reme => "REME", ListModification;
    Remen => "REMEN", ListNRemoval;
    Set => "SET", Assignment;
    Subs => "SUBS", ListSubset;
    In => "IN", ListInclusion;
    Nin => "NIN", ListInclusion;
    Clr => "CLR", ListClear;
    Len => "LEN", ListLength;
    Send => "SEND", Send;
    Rand => "RAND", RandomNumberGeneration;
    Round => "ROUND", RoundNumber;
    Lr => "LR", ListRead;
    Lw => "LW", ListWrite;
}

impl Opcode {
    ///Parses `mnemonic`, ignoring case.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(mnemonic))
            .copied()
    }

    pub fn arity(&self) -> Arity {
        self.operator().arity()
    }
}

impl FromStr for Opcode {
    type Err = TypeckError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| TypeckError::UnknownOpcode(s.to_owned()))
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod test {
    use aasm_types::{Arity, Operator};

    use super::Opcode;

    #[test]
    fn parse_mnemonics() {
        assert_eq!(Opcode::from_mnemonic("decl"), Some(Opcode::Decl));
        assert_eq!("Wlteq".parse::<Opcode>(), Ok(Opcode::Wlteq));
        assert!("JMP".parse::<Opcode>().is_err());
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_mnemonic(&op.to_string()), Some(*op));
        }
    }

    #[test]
    fn families() {
        assert_eq!(Opcode::Set.operator(), Operator::Assignment);
        assert_eq!(Opcode::Nin.operator(), Operator::ListInclusion);
        assert_eq!(Opcode::Mod.arity(), Arity::Exact(3));
        assert_eq!(Opcode::Rand.arity(), Arity::AtLeast(1));
        assert_eq!(Opcode::Clr.arity(), Arity::Exact(1));
    }
}

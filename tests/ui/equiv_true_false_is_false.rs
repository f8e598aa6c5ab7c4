//! The type-level table makes `TrueType ↔ FalseType` the type `FalseType`.

use conlogic::truth::types::{EquivOf, FalseType, TrueType};

fn main() {
    let _verdict: TrueType = <EquivOf<TrueType, FalseType>>::default();
}

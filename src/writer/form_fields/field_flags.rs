//! Field flags for interactive PDF form fields.
//!
//! Bit positions follow ISO 32000-1:2008 Section 12.7.3 (Field Flags). The
//! tables number bits from 1, so table bit `n` is `1 << (n - 1)` here.
//!
//! The field variant decides which bits are fixed:
//! - Checkboxes carry neither `RADIO` nor `PUSHBUTTON`
//! - Radio groups always carry `RADIO`
//! - Combo boxes always carry `COMBO`; list boxes never do
//! - Text and signature fields carry no type bit

use bitflags::bitflags;

bitflags! {
    /// Common field flags applicable to all field types.
    ///
    /// Per PDF spec Table 221 (Field flags common to all field types).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u32 {
        /// Bit 1: Field is read-only; user cannot change the value
        const READ_ONLY = 1 << 0;

        /// Bit 2: Field is required; must have a value before submit
        const REQUIRED = 1 << 1;

        /// Bit 3: Field should not be exported by submit-form action
        const NO_EXPORT = 1 << 2;
    }
}

bitflags! {
    /// Text field flags (field type Tx).
    ///
    /// Per PDF spec Table 228 (Field flags specific to text fields).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextFieldFlags: u32 {
        /// Bit 13: Text may include multiple lines
        const MULTILINE = 1 << 12;

        /// Bit 14: Text should be displayed as asterisks (password)
        const PASSWORD = 1 << 13;

        /// Bit 23: Text should not be spell-checked
        const DO_NOT_SPELL_CHECK = 1 << 22;

        /// Bit 24: Text should not scroll beyond visible area
        const DO_NOT_SCROLL = 1 << 23;
    }
}

bitflags! {
    /// Button field flags (field type Btn).
    ///
    /// Per PDF spec Table 226 (Field flags specific to button fields).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonFieldFlags: u32 {
        /// Bit 15: (radio) At least one button in the group must be on
        const NO_TOGGLE_TO_OFF = 1 << 14;

        /// Bit 16: This is a radio button group
        const RADIO = 1 << 15;

        /// Bit 17: This is a push button
        const PUSHBUTTON = 1 << 16;

        /// Bit 26: Radio buttons with the same on-state turn on together
        const RADIOS_IN_UNISON = 1 << 25;
    }
}

bitflags! {
    /// Choice field flags (field type Ch).
    ///
    /// Per PDF spec Table 230 (Field flags specific to choice fields).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ChoiceFieldFlags: u32 {
        /// Bit 18: This is a combo box (dropdown); if not set, it's a list box
        const COMBO = 1 << 17;

        /// Bit 19: (combo only) User may enter custom text
        const EDIT = 1 << 18;

        /// Bit 20: Options should be sorted alphabetically
        const SORT = 1 << 19;

        /// Bit 22: (list only) Allow multiple selections
        const MULTI_SELECT = 1 << 21;

        /// Bit 27: Value is committed when selection changes (not on blur)
        const COMMIT_ON_SEL_CHANGE = 1 << 26;
    }
}

/// Combine common flags with type-specific bits into an `Ff` value.
pub(crate) fn combine(common: FieldFlags, specific: u32) -> i64 {
    i64::from(common.bits() | specific)
}

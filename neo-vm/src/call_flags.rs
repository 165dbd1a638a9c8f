use bitflags::bitflags;

bitflags! {
    /// Permissions granted to a contract invoked through `System.Contract.Call`.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CallFlags: u8 {
        const NONE = 0b0000_0000;
        const READ_STATES = 0b0000_0001;
        const WRITE_STATES = 0b0000_0010;
        const ALLOW_CALL = 0b0000_0100;
        const ALLOW_NOTIFY = 0b0000_1000;
    }
}

impl CallFlags {
    /// `READ_STATES` and `WRITE_STATES`.
    pub const STATES: CallFlags = CallFlags::READ_STATES.union(CallFlags::WRITE_STATES);
    /// `READ_STATES` and `ALLOW_CALL`.
    pub const READ_ONLY: CallFlags = CallFlags::READ_STATES.union(CallFlags::ALLOW_CALL);
    pub const ALL: CallFlags = CallFlags::STATES
        .union(CallFlags::ALLOW_CALL)
        .union(CallFlags::ALLOW_NOTIFY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_flags_match_protocol_values() {
        assert_eq!(CallFlags::STATES.bits(), 0x03);
        assert_eq!(CallFlags::READ_ONLY.bits(), 0x05);
        assert_eq!(CallFlags::ALL.bits(), 0x0f);
        assert_eq!(CallFlags::default(), CallFlags::NONE);
    }

    #[test]
    fn all_contains_every_permission() {
        assert!(CallFlags::ALL.contains(CallFlags::READ_ONLY));
        assert!(CallFlags::ALL.contains(CallFlags::ALLOW_NOTIFY));
        assert!(!CallFlags::READ_ONLY.contains(CallFlags::WRITE_STATES));
        assert_eq!(CallFlags::from_bits(0x10), None);
    }
}

//! Link health tracking
//!
//! Faults never stop the control loop. They only raise a warning flag for
//! the host to see, which clears on the next good frame. The counters go
//! out with every `status` reply.

use super::reader::LinkFault;

/// Link health counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    warning: bool,
    /// Valid frames received
    pub frames: u32,
    /// Stray bytes dropped while looking for a terminator
    pub skipped_bytes: u32,
    /// Block reads that timed out
    pub timeouts: u32,
    /// Blocks that failed the checksum
    pub checksum_errors: u32,
    /// Blocks with an impossible PARAM_LEN
    pub malformed: u32,
    /// UART errors
    pub bus_errors: u32,
}

impl LinkStatus {
    /// Create a new, healthy status
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the link is degraded
    pub fn is_warning(&self) -> bool {
        self.warning
    }

    /// Record a valid frame
    pub fn record_frame(&mut self) {
        self.frames = self.frames.wrapping_add(1);
        self.warning = false;
    }

    /// Record a dropped stray byte
    pub fn record_skip(&mut self) {
        self.skipped_bytes = self.skipped_bytes.wrapping_add(1);
    }

    /// Record a failed poll
    pub fn record_fault(&mut self, fault: LinkFault) {
        let counter = match fault {
            LinkFault::Timeout => &mut self.timeouts,
            LinkFault::Bus => &mut self.bus_errors,
            LinkFault::Checksum => &mut self.checksum_errors,
            LinkFault::Malformed => &mut self.malformed,
        };
        *counter = counter.wrapping_add(1);
        self.warning = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_set_and_cleared() {
        let mut status = LinkStatus::new();
        assert!(!status.is_warning());

        status.record_fault(LinkFault::Checksum);
        assert!(status.is_warning());
        assert_eq!(status.checksum_errors, 1);

        // Skipped bytes are normal traffic and leave the flag alone
        status.record_skip();
        assert!(status.is_warning());

        status.record_frame();
        assert!(!status.is_warning());
        assert_eq!(status.frames, 1);
    }

    #[test]
    fn test_fault_counters() {
        let mut status = LinkStatus::new();
        status.record_fault(LinkFault::Timeout);
        status.record_fault(LinkFault::Timeout);
        status.record_fault(LinkFault::Malformed);
        status.record_fault(LinkFault::Bus);
        assert_eq!(status.timeouts, 2);
        assert_eq!(status.malformed, 1);
        assert_eq!(status.bus_errors, 1);
        assert_eq!(status.checksum_errors, 0);
    }
}

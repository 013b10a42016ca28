//! Architecture-specific counter sets and formulas
//!
//! BOPs ("bottleneck operations") approximate useful throughput as retired
//! work minus branch and memory traffic. Counter names follow the Linux perf
//! spelling for each architecture.

use crate::error::MetricsError;
use crate::types::sample::TimePoint;
use std::str::FromStr;

/// x86 counter names
pub mod x86 {
    pub const UOPS_EXECUTED: &str = "uops_executed.core";
    pub const BRANCHES_RETIRED: &str = "br_inst_retired.all_branches";
    pub const LOADS_RETIRED: &str = "mem_inst_retired.all_loads";
    pub const STORES_RETIRED: &str = "mem_inst_retired.all_stores";

    /// Double-precision FP counters weighted by lanes per instruction
    pub const FP_DOUBLE_WEIGHTED: [(&str, f64); 4] = [
        ("fp_arith_inst_retired.scalar_double", 1.0),
        ("fp_arith_inst_retired.128b_packed_double", 2.0),
        ("fp_arith_inst_retired.256b_packed_double", 4.0),
        ("fp_arith_inst_retired.512b_packed_double", 8.0),
    ];

    /// Single-precision FP counters weighted by lanes per instruction
    pub const FP_SINGLE_WEIGHTED: [(&str, f64); 4] = [
        ("fp_arith_inst_retired.scalar_single", 1.0),
        ("fp_arith_inst_retired.128b_packed_single", 4.0),
        ("fp_arith_inst_retired.256b_packed_single", 8.0),
        ("fp_arith_inst_retired.512b_packed_single", 16.0),
    ];
}

/// arm counter names
pub mod arm {
    pub const INST_RETIRED: &str = "inst_retired";
    pub const BRANCHES_RETIRED: &str = "br_retired";
    pub const L1D_REFILL: &str = "l1d_cache_refill";
    pub const L1D_WRITEBACK: &str = "l1d_cache_wb";
}

/// CPU architecture the trace was collected on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    Arm,
}

impl FromStr for Arch {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x86" => Ok(Arch::X86),
            "arm" => Ok(Arch::Arm),
            other => Err(MetricsError::UnknownArch(other.to_string())),
        }
    }
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::Arm => "arm",
        }
    }

    /// Bottleneck operations observed at one timestamp: retired work minus
    /// branches and memory traffic. Can go negative when a counter resets
    /// mid-run; callers decide how to treat that.
    pub fn bops_count(&self, point: &TimePoint) -> f64 {
        match self {
            Arch::X86 => {
                point.counter(x86::UOPS_EXECUTED)
                    - point.counter(x86::BRANCHES_RETIRED)
                    - (point.counter(x86::LOADS_RETIRED) + point.counter(x86::STORES_RETIRED))
            }
            Arch::Arm => {
                point.counter(arm::INST_RETIRED)
                    - point.counter(arm::BRANCHES_RETIRED)
                    - (point.counter(arm::L1D_REFILL) + point.counter(arm::L1D_WRITEBACK))
            }
        }
    }

    /// Floating-point operations observed at one timestamp, weighted by SIMD
    /// width and precision. `None` where the architecture exposes no usable
    /// FP counters.
    pub fn flop_count(&self, point: &TimePoint) -> Option<f64> {
        match self {
            Arch::X86 => {
                let flops: f64 = x86::FP_DOUBLE_WEIGHTED
                    .iter()
                    .chain(x86::FP_SINGLE_WEIGHTED.iter())
                    .map(|(event, weight)| point.counter(event) * weight)
                    .sum();
                Some(flops)
            }
            Arch::Arm => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(readings: &[(&str, f64)]) -> TimePoint {
        let mut point = TimePoint::new(1.0);
        for (event, value) in readings {
            point.record(event, *value);
        }
        point
    }

    #[test]
    fn test_from_str() {
        assert_eq!("x86".parse::<Arch>().unwrap(), Arch::X86);
        assert_eq!("arm".parse::<Arch>().unwrap(), Arch::Arm);
        assert!(matches!(
            "riscv".parse::<Arch>(),
            Err(MetricsError::UnknownArch(_))
        ));
    }

    #[test]
    fn test_x86_bops_count() {
        let point = point(&[
            (x86::UOPS_EXECUTED, 500.0),
            (x86::BRANCHES_RETIRED, 50.0),
            (x86::LOADS_RETIRED, 20.0),
            (x86::STORES_RETIRED, 10.0),
        ]);
        assert_eq!(Arch::X86.bops_count(&point), 420.0);
    }

    #[test]
    fn test_arm_bops_count() {
        let point = point(&[
            (arm::INST_RETIRED, 1000.0),
            (arm::BRANCHES_RETIRED, 100.0),
            (arm::L1D_REFILL, 30.0),
            (arm::L1D_WRITEBACK, 20.0),
        ]);
        assert_eq!(Arch::Arm.bops_count(&point), 850.0);
    }

    #[test]
    fn test_missing_counters_count_as_zero() {
        let point = point(&[(x86::UOPS_EXECUTED, 100.0)]);
        assert_eq!(Arch::X86.bops_count(&point), 100.0);
    }

    #[test]
    fn test_x86_flop_count_weights() {
        let point = point(&[
            ("fp_arith_inst_retired.scalar_double", 1.0),
            ("fp_arith_inst_retired.128b_packed_double", 1.0),
            ("fp_arith_inst_retired.256b_packed_double", 1.0),
            ("fp_arith_inst_retired.512b_packed_double", 1.0),
            ("fp_arith_inst_retired.scalar_single", 1.0),
            ("fp_arith_inst_retired.128b_packed_single", 1.0),
            ("fp_arith_inst_retired.256b_packed_single", 1.0),
            ("fp_arith_inst_retired.512b_packed_single", 1.0),
        ]);
        // 1+2+4+8 doubles, 1+4+8+16 singles
        assert_eq!(Arch::X86.flop_count(&point), Some(44.0));
    }

    #[test]
    fn test_arm_has_no_flop_count() {
        let point = point(&[(arm::INST_RETIRED, 1000.0)]);
        assert_eq!(Arch::Arm.flop_count(&point), None);
    }
}

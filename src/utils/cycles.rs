//! Cycle counter reads for the `cpu_cycles` measurement mode.
//!
//! x86/x86_64 read the TSC fenced by LFENCE; aarch64 reads the virtual timer,
//! which ticks at a fixed frequency rather than per core cycle.

#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        read_tsc()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cntvct()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64 architecture");
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
fn read_tsc() -> u64 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{_mm_lfence, _rdtsc};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{_mm_lfence, _rdtsc};

    // SAFETY: LFENCE (SSE2) and RDTSC are available on every supported x86 target.
    unsafe {
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cntvct() -> u64 {
    let val: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0.
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}

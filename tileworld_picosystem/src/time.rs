use rp_pico::hal::pac;

/// Low word of the free-running microsecond timer. Wraps roughly every 71
/// minutes, so compare readings with `wrapping_sub`.
pub fn time_us() -> u32 {
    // TIMERAWL reads the counter without latching the high word.
    unsafe { (*pac::TIMER::PTR).timerawl.read().bits() }
}

/// Adds `addend` into `acc` modulo `2^(8 * acc.len())`, both treated as
/// big-endian integers.
///
/// `addend` may be shorter than `acc`, in which case it is tail-aligned
/// (its most significant byte lines up with position `acc.len() -
/// addend.len()`, as if it were zero-padded on the left). Carries
/// propagate right to left.
///
/// # Panics
///
/// Panics if `addend.len() > acc.len()`.
pub fn add_seedlen(acc: &mut [u8], addend: &[u8]) {
    assert!(
        addend.len() <= acc.len(),
        "addend ({} bytes) longer than accumulator ({} bytes)",
        addend.len(),
        acc.len()
    );
    let offset = acc.len() - addend.len();
    let mut carry: u16 = 0;
    for i in (0..acc.len()).rev() {
        let addend_byte = if i >= offset { addend[i - offset] as u16 } else { 0 };
        let sum = acc[i] as u16 + addend_byte + carry;
        acc[i] = sum as u8;
        carry = sum >> 8;
    }
}

// crates/monocut-core/src/helpers/size.rs

use super::fixed::to_fixed;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Human-readable byte count: `N B`, `x.x KB`, `x.x MB`, `x.xx GB` (binary units).
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{} KB", to_fixed(bytes as f64 / KIB as f64, 1))
    } else if bytes < GIB {
        format!("{} MB", to_fixed(bytes as f64 / MIB as f64, 1))
    } else {
        format!("{} GB", to_fixed(bytes as f64 / GIB as f64, 2))
    }
}

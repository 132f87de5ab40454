//! Generates the named component accessors (`.xy()`, `.wzyx_mut()`,
//! `.s7()`, ...) for vectors and swizzle views.
//!
//! Every accessor is a one-line forward to the generic `swizzle` /
//! `swizzle_mut` methods with a `PickN<..>` selector, so only the names are
//! generated here. The output is `include!`d by `src/accessors.rs`.

use std::env;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Backing vector widths.
const WIDTHS: [usize; 6] = [1, 2, 3, 4, 8, 16];

/// Selection widths which may be swizzled again by letter.
const VIEW_WIDTHS: [usize; 3] = [2, 3, 4];

/// Selection widths which may be swizzled again by `sN`.
const VIEW_WIDTHS_S: [usize; 5] = [2, 3, 4, 8, 16];

const POSITIONAL: [char; 4] = ['x', 'y', 'z', 'w'];
const COLOR: [char; 4] = ['r', 'g', 'b', 'a'];
const HEX: [char; 16] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'a', 'b', 'c', 'd', 'e', 'f'];

/// All index lists of length 1 to 4 over `width` lanes, repeats included.
fn combos(width: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut frontier: Vec<Vec<usize>> = vec![Vec::new()];

    for _ in 0..4 {
        let mut next = Vec::with_capacity(frontier.len() * width);
        for prefix in frontier.iter() {
            for idx in 0..width {
                let mut combo = prefix.clone();
                combo.push(idx);
                next.push(combo);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

fn name(letters: &[char], combo: &[usize]) -> String {
    combo.iter().map(|&i| letters[i]).collect()
}

fn pick(combo: &[usize]) -> String {
    let idxs: Vec<String> = combo.iter().map(|i| i.to_string()).collect();
    format!("Pick{}<{}>", combo.len(), idxs.join(", "))
}

fn write_vector_impl(src: &mut String, width: usize) {
    writeln!(src, "impl<T: Scalar> Vector<T, {}> {{", width).unwrap();

    if width <= 4 {
        for combo in combos(width) {
            let sel = pick(&combo);
            let m = combo.len();
            for letters in [&POSITIONAL, &COLOR] {
                let n = name(letters, &combo);
                writeln!(src, "    /// Selects `.{}`.", n).unwrap();
                writeln!(src, "    #[inline] pub fn {n}(&self) -> Swizzle<'_, T, {w}, {sel}, {m}> \
                    {{ self.swizzle::<{sel}, {m}>() }}", n = n, w = width, sel = sel, m = m).unwrap();
                writeln!(src, "    /// Selects `.{}` for writing.", n).unwrap();
                writeln!(src, "    #[inline] pub fn {n}_mut(&mut self) -> SwizzleMut<'_, T, {w}, {sel}, {m}> \
                    {{ self.swizzle_mut::<{sel}, {m}>() }}", n = n, w = width, sel = sel, m = m).unwrap();
            }
        }
    }

    for idx in 0..width {
        let sel = pick(&[idx]);
        writeln!(src, "    /// Selects lane {}.", idx).unwrap();
        writeln!(src, "    #[inline] pub fn s{h}(&self) -> Swizzle<'_, T, {w}, {sel}, 1> \
            {{ self.swizzle::<{sel}, 1>() }}", h = HEX[idx], w = width, sel = sel).unwrap();
        writeln!(src, "    /// Selects lane {} for writing.", idx).unwrap();
        writeln!(src, "    #[inline] pub fn s{h}_mut(&mut self) -> SwizzleMut<'_, T, {w}, {sel}, 1> \
            {{ self.swizzle_mut::<{sel}, 1>() }}", h = HEX[idx], w = width, sel = sel).unwrap();
    }

    writeln!(src, "}}\n").unwrap();
}

fn write_view_impl(src: &mut String, view: &str, width: usize, letters_too: bool) {
    writeln!(src, "impl<'a, T: Scalar, S: Selector<{k}>, const N: usize> {v}<'a, T, N, S, {k}> {{",
        v = view, k = width).unwrap();

    if letters_too {
        for combo in combos(width) {
            let sel = pick(&combo);
            let m = combo.len();
            for letters in [&POSITIONAL, &COLOR] {
                writeln!(src, "    #[inline] pub fn {n}(self) -> {v}<'a, T, N, Compose<S, {sel}, {k}>, {m}> \
                    {{ self.swizzle::<{sel}, {m}>() }}",
                    n = name(letters, &combo), v = view, sel = sel, k = width, m = m).unwrap();
            }
        }
    }

    for idx in 0..width {
        let sel = pick(&[idx]);
        writeln!(src, "    #[inline] pub fn s{h}(self) -> {v}<'a, T, N, Compose<S, {sel}, {k}>, 1> \
            {{ self.swizzle::<{sel}, 1>() }}", h = HEX[idx], v = view, sel = sel, k = width).unwrap();
    }

    writeln!(src, "}}\n").unwrap();
}

fn main() {
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());
    let mut src = String::with_capacity(1 << 20);

    writeln!(src, "// Generated by build.rs. Do not edit.\n").unwrap();

    for &width in WIDTHS.iter() {
        write_vector_impl(&mut src, width);
    }

    for view in ["Swizzle", "SwizzleMut"] {
        for &width in VIEW_WIDTHS_S.iter() {
            write_view_impl(&mut src, view, width, VIEW_WIDTHS.contains(&width));
        }
    }

    let mut file = File::create(dest.join("accessors.rs")).unwrap();
    file.write_all(src.as_bytes()).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}

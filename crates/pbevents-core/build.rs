use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("key_sym.rs");
    let mut f = File::create(&dest_path).unwrap();

    // Generate the KeySym newtype wrapper
    writeln!(
        f,
        r#"
/// Abstract, hardware-independent key symbol as understood by the host.
///
/// This is a newtype wrapper around u16. Printable symbols use their
/// lowercase ASCII value; navigation and function keys live above 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct KeySym(pub u16);

impl KeySym {{
    /// Get the raw numeric symbol value
    pub fn code(self) -> u16 {{
        self.0
    }}

    /// Get the name of this symbol
    pub fn name(self) -> &'static str {{
        sym_name(self.0)
    }}
}}

impl From<u16> for KeySym {{
    fn from(code: u16) -> Self {{
        KeySym(code)
    }}
}}

impl From<KeySym> for u16 {{
    fn from(sym: KeySym) -> Self {{
        sym.0
    }}
}}

impl fmt::Display for KeySym {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "{{}}", self.name())
    }}
}}

impl FromStr for KeySym {{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        sym_from_name(s).ok_or_else(|| format!("Unknown key symbol: {{}}", s))
    }}
}}
"#
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}

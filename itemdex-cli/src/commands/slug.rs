use itemdex_core::slug;

pub(crate) fn run_slug(input: &str, decode: bool) {
    if decode {
        println!("{}", slug::decode(input));
    } else {
        println!("{}", slug::encode(input));
    }
}

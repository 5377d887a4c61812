// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/scout_score.ico");
        res.compile().unwrap();
    }
}

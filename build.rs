fn main() {
    // Only run winres on Windows targets
    #[cfg(target_os = "windows")]
    {
        // Embed version/resource strings into the final executable
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "cue-slammer");
        res.set("FileDescription", "OSC cue-console stress sender");
        match res.compile() {
            Ok(_) => println!("cargo:warning=winres: resources embedded"),
            Err(e) => println!("cargo:warning=winres failed: {}", e),
        }
    }
}

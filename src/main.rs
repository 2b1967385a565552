fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlist::runtime::run()
}

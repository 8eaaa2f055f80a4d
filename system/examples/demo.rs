use filedrop_system::{HostPlatform, Platform, PlatformIdentity};

fn main() {
    println!("Checking platform identity...");

    let platform = HostPlatform.platform();
    println!("Platform: {platform}");
    println!("Native: {}", platform.is_native());
    println!("Mobile: {}", matches!(platform, Platform::Ios | Platform::Android));
}

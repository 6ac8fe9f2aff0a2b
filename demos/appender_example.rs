//! FastDFS Appender File Operations Example
//!
//! This example demonstrates working with appender files in FastDFS.
//! Appender files are special files that support modification operations
//! like append, modify, and truncate, making them suitable for log files
//! or other files that need to be updated after creation.
//!
//! Note: Appender file operations require proper storage server configuration.
//! Not all FastDFS deployments may have this feature enabled.
//!
//! Run this example with:
//! ```bash
//! cargo run --example appender_example
//! ```

use fastdfs::{Client, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("FastDFS Rust Client - Appender File Example");
    println!("{}", "=".repeat(50));

    // Step 1: Configure and create client
    // Set up the client with your tracker server address
    let config = ClientConfig::new(vec!["192.168.1.100:22122".to_string()]);
    let client = Client::new(config)?;

    // Example 1: Upload appender file
    // Appender files are created using a special upload command
    // that marks them as modifiable
    println!("\n1. Uploading appender file...");
    let initial_data = b"Initial log entry\n";
    let file_id = client
        .upload_appender_buffer(initial_data, "log", None)
        .await?;
    println!("   Uploaded successfully!");
    println!("   File ID: {}", file_id);

    // Example 2: Get initial file info
    // Retrieve information about the newly created appender file
    println!("\n2. Getting initial file information...");
    let file_info = client.get_file_info(&file_id).await?;
    println!("   File size: {} bytes", file_info.file_size);
    println!("   Create time: {:?}", file_info.create_time);
    println!("   CRC32: {}", file_info.crc32);

    // Example 3: Download and display content
    // Verify the initial content of the appender file
    println!("\n3. Downloading file content...");
    let content = client.download_file(&file_id).await?;
    println!("   Content:");
    println!("{}", String::from_utf8_lossy(&content));

    // Example 4: Append more data
    // Appends grow the file in place; the file id does not change
    println!("\n4. Appending a second log entry...");
    client.append_file(&file_id, b"Second log entry\n").await?;
    let content = client.download_file(&file_id).await?;
    println!("   Content after append:");
    println!("{}", String::from_utf8_lossy(&content));

    // Example 5: Modify a byte range in place
    // Overwrites existing bytes starting at the given offset without
    // shifting the rest of the file; the replacement is the same length
    // as the original line so it doesn't spill into the appended entry
    println!("\n5. Modifying the first line in place...");
    let updated_first_line = b"Updated log entry!";
    client.modify_file(&file_id, 0, updated_first_line).await?;
    let content = client.download_file(&file_id).await?;
    println!("   Content after modify:");
    println!("{}", String::from_utf8_lossy(&content));

    // Example 6: Truncate back down
    // Drops everything past the given size, discarding the appended entry
    println!("\n6. Truncating back to just the first line...");
    client.truncate_file(&file_id, updated_first_line.len() as u64).await?;
    let content = client.download_file(&file_id).await?;
    println!("   Content after truncate:");
    println!("{}", String::from_utf8_lossy(&content));

    // Example 5: Clean up
    // Delete the appender file
    println!("\n5. Cleaning up...");
    client.delete_file(&file_id).await?;
    println!("   File deleted successfully!");

    println!("\n{}", "=".repeat(50));
    println!("Example completed successfully!");

    // Close the client and release all resources
    client.close().await;

    Ok(())
}
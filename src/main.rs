mod entry;

use scaleprobe::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}

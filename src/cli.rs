use argh::FromArgs;

/// Track a colored object in a webcam or video stream and draw its motion trail
#[derive(FromArgs, Debug)]
pub struct Args {
    /// color of the object to track: black, white, red, green, blue, yellow, purple, orange, gray, or cyan
    #[argh(option, short = 'c', default = "String::from(\"blue\")")]
    pub color: String,

    /// maximum number of positions kept in the tracking trail
    #[argh(option, short = 't', default = "64")]
    pub trail_length: usize,

    /// path/to/video/file.mp4; the webcam is used when omitted
    #[argh(option, short = 'i')]
    pub input: Option<String>,

    /// thickness scale of the tracking trail, roughly [0, 10]
    #[argh(option, short = 'w', default = "5.0")]
    pub trail_width: f64,

    /// webcam device index
    #[argh(option, default = "0")]
    pub camera: i32,

    /// root directory for the tracked frames and output video
    #[argh(option, default = "String::from(\"./frames\")")]
    pub output_dir: String,

    /// minimum enclosing radius in pixels for a detection to count
    #[argh(option, default = "10")]
    pub min_radius: i32,

    /// keep centroids of detections at or below the minimum radius in the trail
    #[argh(switch)]
    pub keep_small_detections: bool,

    /// use headless mode
    #[argh(switch)]
    pub headless: bool,
}

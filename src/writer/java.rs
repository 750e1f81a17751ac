//! Emit a Pedro Pathing `LinearOpMode` for a normalized path.
//!
//! Layout of the generated class:
//!   1. pose fields (start pose + one per segment end point)
//!   2. one `PathChain` field batch
//!   3. `buildPaths()`, one chained builder per segment
//!   4. `autonomousPathUpdate()`, one `case` per segment plus a terminal one
//!
//! All four are index-aligned with `NormalizedPath::segments`.

use std::fmt::{self, Write};

use super::format::canon;
use crate::model::{HeadingMode, NormalizedPath, NormalizedSegment, START_POSE_NAME};

const PACKAGE_AND_IMPORTS: &str = "\
package org.firstinspires.ftc.teamcode.opModes.autonomous;
import com.pedropathing.follower.Follower;
import com.pedropathing.geometry.BezierCurve;
import com.pedropathing.geometry.BezierLine;
import com.pedropathing.geometry.Pose;
import com.pedropathing.paths.PathChain;
import com.pedropathing.util.Timer;
import com.qualcomm.robotcore.eventloop.opmode.Autonomous;
import com.qualcomm.robotcore.eventloop.opmode.LinearOpMode;

import org.firstinspires.ftc.teamcode.pedroPathing.Constants;

";

const LIFECYCLE: &str = "    @Override
    public void runOpMode() throws InterruptedException {
        initialize();
        waitForStart();
        play();
        if (isStopRequested()) return;
        while (opModeIsActive()) update();
    }
    private void setPathState(int pState) {
        pathState = pState;
        pathTimer.resetTimer();
    }

    private Follower follower;
    private Timer pathTimer;
    private int pathState;

";

const RUNTIME: &str = "    private void initialize() {
        pathTimer = new Timer();
        follower = Constants.createFollower(hardwareMap);
        buildPaths();
        follower.setStartingPose(startPose);
    }

    private void play() {
        setPathState(0);
    }

    private void update() {
        follower.update();
        autonomousPathUpdate();

        telemetry.addData(\"path state\", pathState);
        telemetry.addData(\"x\", follower.getPose().getX());
        telemetry.addData(\"y\", follower.getPose().getY());
        telemetry.addData(\"heading\", follower.getPose().getHeading());
        telemetry.update();
    }
}
";

/// Returns the complete Java source for `path` as class `class_name`.
///
/// `class_name` is pasted in verbatim; the caller picks a valid identifier.
pub fn emit(path: &NormalizedPath, class_name: &str) -> String {
    OpMode { path, class_name }.to_string()
}

struct OpMode<'a> {
    path: &'a NormalizedPath,
    class_name: &'a str,
}

impl fmt::Display for OpMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PACKAGE_AND_IMPORTS)?;
        writeln!(f, "@Autonomous")?;
        writeln!(f, "public class {} extends LinearOpMode {{", self.class_name)?;
        f.write_str(LIFECYCLE)?;

        self.write_poses(f)?;
        self.write_path_fields(f)?;
        self.write_build_paths(f)?;
        self.write_state_machine(f)?;

        f.write_str(RUNTIME)
    }
}

impl OpMode<'_> {
    fn write_poses(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = &self.path.start_pose;
        writeln!(f, "    // Start Pose")?;
        writeln!(
            f,
            "    private final Pose {START_POSE_NAME} = new Pose({}, {}, Math.toRadians({})); // Start position",
            canon(start.x),
            canon(start.y),
            canon(start.heading_deg)
        )?;
        writeln!(f)?;

        writeln!(f, "    // Trajectory Poses")?;
        for seg in &self.path.segments {
            let p = &seg.end_pose;
            writeln!(
                f,
                "    private final Pose {} = new Pose({}, {}, Math.toRadians({})); // {}",
                seg.pose_name(),
                canon(p.x),
                canon(p.y),
                canon(p.heading_deg),
                seg.name
            )?;
        }
        writeln!(f)
    }

    fn write_path_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.segments.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = self.path.segments.iter().map(|s| s.path_name()).collect();
        writeln!(f, "    private PathChain {};", names.join(", "))?;
        writeln!(f)
    }

    fn write_build_paths(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    public void buildPaths() {{")?;

        let mut prev_pose = START_POSE_NAME.to_string();
        for (i, seg) in self.path.segments.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_builder(f, seg, &prev_pose)?;
            prev_pose = seg.pose_name();
        }

        writeln!(f, "    }}")?;
        writeln!(f)
    }

    fn write_state_machine(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    public void autonomousPathUpdate() {{")?;
        writeln!(f, "        switch (pathState) {{")?;

        for (i, seg) in self.path.segments.iter().enumerate() {
            writeln!(f, "            case {i}:")?;
            if i == 0 {
                // first leg starts as soon as play() runs
                writeln!(f, "                follower.followPath({});", seg.path_name())?;
                writeln!(f, "                setPathState({});", i + 1)?;
            } else {
                writeln!(f, "                if (!follower.isBusy()) {{")?;
                writeln!(f, "                    follower.followPath({});", seg.path_name())?;
                writeln!(f, "                    setPathState({});", i + 1)?;
                writeln!(f, "                }}")?;
            }
            writeln!(f, "                break;")?;
            writeln!(f)?;
        }

        writeln!(f, "            case {}:", self.path.segments.len())?;
        writeln!(f, "                // Done")?;
        writeln!(f, "                break;")?;

        writeln!(f, "        }}")?;
        writeln!(f, "    }}")?;
        writeln!(f)
    }
}

/// One `xPath = follower.pathBuilder()...build();` statement.
fn write_builder(f: &mut impl Write, seg: &NormalizedSegment, prev_pose: &str) -> fmt::Result {
    let end_pose = seg.pose_name();

    writeln!(f, "        {} = follower.pathBuilder()", seg.path_name())?;
    match &seg.control_point {
        None => writeln!(f, "                .addPath(new BezierLine({prev_pose}, {end_pose}))")?,
        Some(cp) => {
            writeln!(f, "                .addPath(new BezierCurve(")?;
            writeln!(f, "                        {prev_pose},")?;
            writeln!(
                f,
                "                        new Pose({}, {}), // Control point",
                canon(cp.x),
                canon(cp.y)
            )?;
            writeln!(f, "                        {end_pose}")?;
            writeln!(f, "                ))")?;
        }
    }

    match seg.heading_mode {
        HeadingMode::Constant => writeln!(
            f,
            "                .setConstantHeadingInterpolation({end_pose}.getHeading())"
        )?,
        HeadingMode::Linear => writeln!(
            f,
            "                .setLinearHeadingInterpolation({prev_pose}.getHeading(), {end_pose}.getHeading())"
        )?,
    }
    writeln!(f, "                .build();")
}

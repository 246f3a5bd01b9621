use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Keypoints;
    "GSUM" [], "Calculate and print geometry statistics of the selected entities";
    "K" ["npt", "x", "y", "z"] -> Keypoint, "Define a keypoint";
    "KBETW" ["kp1", "kp2", "kpnew", "type", "value"] -> GeneratedKeypoint, "Create a keypoint between two existing keypoints";
    "KCENTER" ["type", "val1", "val2", "val3", "val4", "kpnew"] -> GeneratedKeypoint, "Create a keypoint at the center of a circular arc";
    "KDELE" ["np1", "np2", "ninc"], "Delete unmeshed keypoints";
    "KDIST" ["kp1", "kp2"] -> KeypointDistance, "Calculate and list the distance between two keypoints";
    "KFILL" ["np1", "np2", "nfill", "nstrt", "ninc", "space"], "Generate keypoints between two keypoints";
    "KGEN" ["itime", "np1", "np2", "ninc", "dx", "dy", "dz", "kinc", "noelem", "imove"], "Generate additional keypoints from a pattern of keypoints";
    "KL" ["nl1", "ratio", "nk1"] -> KeypointOnLine, "Generate a keypoint at a specified location on an existing line";
    "KLIST" ["np1", "np2", "ninc", "lab"], "List the defined keypoints or hard points";
    "KMODIF" ["npt", "x", "y", "z"], "Modify an existing keypoint";
    "KMOVE" ["npt", "kc1", "x1", "y1", "z1", "kc2", "x2", "y2", "z2"], "Calculate and move a keypoint to an intersection";
    "KNODE" ["npt", "node"] -> KeypointAtNode, "Define a keypoint at an existing node location";
    "KPLOT" ["np1", "np2", "ninc", "lab"], "Display the selected keypoints";
    "KPSCALE" ["np1", "np2", "ninc", "rx", "ry", "rz", "kinc", "noelem", "imove"], "Generate a scaled pattern of keypoints";
    "KSCALE" ["kinc", "np1", "np2", "ninc", "rx", "ry", "rz"], "Generate a scaled pattern of keypoints from the active coordinate system";
    "KSUM" [], "Calculate and print geometry statistics of the selected keypoints";
    "KSYMM" ["ncomp", "np1", "np2", "ninc", "kinc", "noelem", "imove"], "Generate a reflected set of keypoints";
    "KTRAN" ["kcnto", "np1", "np2", "ninc", "kinc", "noelem", "imove"], "Transfer a pattern of keypoints to another coordinate system";
    "SOURCE" ["x", "y", "z"], "Define a default location for undefined nodes or keypoints";
};

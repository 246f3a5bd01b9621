use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Volumes;
    "EXTOPT" ["lab", "val1", "val2", "val3", "val4"], "Control options relating to the generation of volume elements from area elements";
    "V" ["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8"] -> VolumeNumber, "Define a volume through keypoints";
    "VA" ["a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9", "a10"] -> VolumeNumber, "Generate a volume bounded by existing areas";
    "VDELE" ["nv1", "nv2", "ninc", "kswp"], "Delete unmeshed volumes";
    "VDGL" ["nv1", "nv2", "ninc"], "List keypoints of a volume that lie on a parametric degeneracy";
    "VDRAG" ["na1", "na2", "na3", "na4", "na5", "na6", "nlp1", "nlp2", "nlp3", "nlp4", "nlp5", "nlp6"], "Generate volumes by dragging an area pattern along a path";
    "VEXT" ["na1", "na2", "ninc", "dx", "dy", "dz", "rx", "ry", "rz"], "Generate additional volumes by extruding areas";
    "VGEN" ["itime", "nv1", "nv2", "ninc", "dx", "dy", "dz", "kinc", "noelem", "imove"], "Generate additional volumes from a pattern of volumes";
    "VLIST" ["nv1", "nv2", "ninc"], "List the defined volumes";
    "VLSCALE" ["nv1", "nv2", "ninc", "rx", "ry", "rz", "kinc", "noelem", "imove"], "Generate a scaled set of volumes from a pattern of volumes";
    "VOFFST" ["narea", "dist", "kinc"], "Generate a volume offset from a given area";
    "VPLOT" ["nv1", "nv2", "ninc", "degen", "scale"], "Display the selected volumes";
    "VROTAT" ["na1", "na2", "na3", "na4", "na5", "na6", "pax1", "pax2", "arc", "nseg"], "Generate cylindrical volumes by rotating an area pattern about an axis";
    "VSUM" ["lab"], "Calculate and print geometry statistics of the selected volumes";
    "VSYMM" ["ncomp", "nv1", "nv2", "ninc", "kinc", "noelem", "imove"], "Generate volumes from a volume pattern by symmetry reflection";
    "VTRAN" ["kcnto", "nv1", "nv2", "ninc", "kinc", "noelem", "imove"], "Transfer a pattern of volumes to another coordinate system";
};

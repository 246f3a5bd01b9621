use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Areas;
    "A" ["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "p11", "p12", "p13", "p14", "p15", "p16", "p17", "p18"] -> AreaNumber, "Define an area by connecting keypoints";
    "ADELE" ["na1", "na2", "ninc", "kswp"], "Delete unmeshed areas";
    "ADGL" ["na1", "na2", "ninc"], "Display the degeneracy lines of areas";
    "ADRAG" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nlp1", "nlp2", "nlp3", "nlp4", "nlp5", "nlp6"], "Generate areas by dragging a line pattern along a path";
    "AFILLT" ["na1", "na2", "rad"], "Generate a fillet at the intersection of two areas";
    "AGEN" ["itime", "na1", "na2", "ninc", "dx", "dy", "dz", "kinc", "noelem", "imove"], "Generate areas from an area pattern";
    "AL" ["l1", "l2", "l3", "l4", "l5", "l6", "l7", "l8", "l9", "l10"] -> AreaNumber, "Generate an area bounded by lines";
    "ALIST" ["na1", "na2", "ninc", "lab"], "List the defined areas";
    "ANORM" ["anum", "noeflip"], "Reorient area normals";
    "AOFFST" ["narea", "dist", "kinc"], "Generate an area offset from a given area";
    "APLOT" ["na1", "na2", "ninc", "degen", "scale"], "Display the selected areas";
    "AREVERSE" ["anum", "noeflip"], "Reverse the normal of an area";
    "AROTAT" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "pax1", "pax2", "arc", "nseg"], "Generate cylindrical areas by rotating a line pattern";
    "ARSCALE" ["na1", "na2", "ninc", "rx", "ry", "rz", "kinc", "noelem", "imove"], "Generate a scaled set of areas";
    "ARSYM" ["ncomp", "na1", "na2", "ninc", "kinc", "noelem", "imove"], "Generate areas by symmetry reflection";
    "ASKIN" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nl7", "nl8", "nl9"], "Generate an area by skinning a surface through guiding lines";
    "ASUB" ["na1", "p1", "p2", "p3", "p4"], "Generate an area using the shape of an existing area";
    "ASUM" ["lab"], "Calculate and print geometry statistics of the selected areas";
    "ATRAN" ["kcnto", "na1", "na2", "ninc", "kinc", "noelem", "imove"], "Transfer a pattern of areas to another coordinate system";
    "SPLOT" ["na1", "na2", "ninc", "mesh"], "Display the selected areas and their subareas";
};
